use super::*;

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    rc::Rc,
};

/// In-process key-value storage. Clones share the same map, so a caller can
/// keep a handle and inspect what the store wrote.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    data: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that already holds `blob` under `key`.
    pub fn with_entry(key: &str, blob: &str) -> Self {
        let storage = Self::new();
        storage
            .data
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        storage
    }
}

impl SnapshotStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, blob: &str) -> Result<(), AppError> {
        self.data
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "memory"
    }
}

/// Seed source returning a fixed list. Clones share the fetch counter.
#[derive(Clone, Default)]
pub struct StaticSeed {
    contacts: Vec<Contact>,
    fetches: Rc<Cell<usize>>,
}

impl StaticSeed {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            fetches: Rc::new(Cell::new(0)),
        }
    }

    pub fn fetches(&self) -> usize {
        self.fetches.get()
    }
}

impl SeedSource for StaticSeed {
    fn fetch(&self) -> Result<Vec<Contact>, AppError> {
        self.fetches.set(self.fetches.get() + 1);
        Ok(self.contacts.clone())
    }

    fn describe(&self) -> String {
        format!("static list of {} contacts", self.contacts.len())
    }
}

/// Used when seeding is switched off; every fetch fails.
pub struct NoSeed;

impl SeedSource for NoSeed {
    fn fetch(&self) -> Result<Vec<Contact>, AppError> {
        Err(AppError::SeedFetchFailed("seeding disabled".to_string()))
    }

    fn describe(&self) -> String {
        "disabled".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() -> Result<(), AppError> {
        let storage = MemoryStorage::new();
        let handle = storage.clone();

        storage.set("contacts", "[]")?;
        assert_eq!(handle.get("contacts")?.as_deref(), Some("[]"));
        assert_eq!(handle.get("other")?, None);
        Ok(())
    }

    #[test]
    fn static_seed_counts_fetches() -> Result<(), AppError> {
        let seed = StaticSeed::new(vec![Contact::new(
            1,
            "A".into(),
            "a@x.com".into(),
            "1".into(),
        )]);
        let handle = seed.clone();

        assert_eq!(seed.fetch()?.len(), 1);
        assert_eq!(handle.fetches(), 1);
        Ok(())
    }

    #[test]
    fn no_seed_always_fails() {
        assert!(matches!(NoSeed.fetch(), Err(AppError::SeedFetchFailed(_))));
    }
}
