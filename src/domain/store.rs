use crate::domain::contact::{Contact, Draft, DraftField, snapshot_from_json};
use crate::errors::AppError;
use crate::storage::{SeedSource, SnapshotStorage};

use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Key under which the full contact list is persisted.
pub const STORAGE_KEY: &str = "contacts";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTarget {
    Create,
    Edit(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Browsing,
    Editing { target: EditTarget, draft: Draft },
}

/// Where `initialize` got its contacts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    Snapshot,
    Seed,
    Empty,
}

/// Owns the ordered contact list and writes a full snapshot to storage after
/// every mutation.
///
/// A failed write leaves the list, the mode and any pending draft exactly as
/// they were before the call.
pub struct ContactStore {
    contacts: Vec<Contact>,
    mode: Mode,
    next_id: u64,
    storage: Box<dyn SnapshotStorage>,
    seed: Box<dyn SeedSource>,
}

impl ContactStore {
    pub fn new(storage: Box<dyn SnapshotStorage>, seed: Box<dyn SeedSource>) -> Self {
        Self {
            contacts: Vec::new(),
            mode: Mode::Browsing,
            next_id: 1,
            storage,
            seed,
        }
    }

    /// Loads the persisted snapshot, or seeds from the remote source when no
    /// snapshot exists (a stored `null` counts as none). Seed failures are
    /// logged and leave the list untouched.
    pub fn initialize(&mut self) -> Result<LoadSource, AppError> {
        let snapshot = match self.storage.get(STORAGE_KEY)? {
            Some(blob) => snapshot_from_json(&blob)?,
            None => None,
        };
        if let Some(contacts) = snapshot {
            let contacts = check_ids(contacts)?;
            debug!(count = contacts.len(), "loaded contacts from snapshot");
            self.replace_all(contacts)?;
            return Ok(LoadSource::Snapshot);
        }

        match self.seed.fetch().and_then(check_ids) {
            Ok(contacts) => {
                self.persist(&contacts)?;
                info!(
                    count = contacts.len(),
                    source = %self.seed.describe(),
                    "seeded contacts"
                );
                self.replace_all(contacts)?;
                Ok(LoadSource::Seed)
            }
            Err(err) => {
                warn!(
                    error = %err,
                    source = %self.seed.describe(),
                    "seed fetch failed, continuing without seed contacts"
                );
                Ok(LoadSource::Empty)
            }
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: u64) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn storage_medium(&self) -> &str {
        self.storage.get_medium()
    }

    pub fn search(&self, term: &str) -> Vec<&Contact> {
        super::search::search(&self.contacts, term)
    }

    /// Starts a new contact. Any pending draft is discarded.
    pub fn begin_create(&mut self) -> Draft {
        let draft = Draft::default();
        self.mode = Mode::Editing {
            target: EditTarget::Create,
            draft: draft.clone(),
        };
        draft
    }

    pub fn begin_edit(&mut self, id: u64) -> Result<Draft, AppError> {
        let contact = self.get(id).ok_or(AppError::NotFound(id))?;
        let draft = Draft::from(contact);

        self.mode = Mode::Editing {
            target: EditTarget::Edit(id),
            draft: draft.clone(),
        };
        Ok(draft)
    }

    pub fn draft(&self) -> Option<&Draft> {
        match &self.mode {
            Mode::Editing { draft, .. } => Some(draft),
            Mode::Browsing => None,
        }
    }

    pub fn update_draft_field(
        &mut self,
        field: &str,
        value: impl Into<String>,
    ) -> Result<(), AppError> {
        let field: DraftField = field.parse()?;

        match &mut self.mode {
            Mode::Editing { draft, .. } => {
                draft.set(field, value.into());
                Ok(())
            }
            Mode::Browsing => Err(AppError::NoActiveDraft),
        }
    }

    /// Writes the pending draft into the list and returns the id it was
    /// stored under.
    pub fn commit_draft(&mut self) -> Result<u64, AppError> {
        let (target, draft) = match &self.mode {
            Mode::Editing { target, draft } => (*target, draft.clone()),
            Mode::Browsing => return Err(AppError::NoActiveDraft),
        };

        let mut next = self.contacts.clone();
        let (id, next_id) = match target {
            EditTarget::Edit(id) => {
                let Some(contact) = next.iter_mut().find(|c| c.id == id) else {
                    // Target vanished; the draft has nothing left to edit
                    self.mode = Mode::Browsing;
                    return Err(AppError::NotFound(id));
                };
                contact.apply(&draft);
                (id, self.next_id)
            }
            EditTarget::Create => {
                let id = self.next_id;
                let after = id.checked_add(1).ok_or_else(|| {
                    AppError::Validation("no contact ids left to assign".to_string())
                })?;
                next.push(Contact::new(id, draft.name, draft.email, draft.phone));
                (id, after)
            }
        };

        self.persist(&next)?;
        self.contacts = next;
        self.next_id = next_id;
        self.mode = Mode::Browsing;
        Ok(id)
    }

    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Browsing;
    }

    /// Removes the contact with `id`. Returns `false` when no such contact
    /// exists, which is not an error.
    pub fn delete_contact(&mut self, id: u64) -> Result<bool, AppError> {
        let next: Vec<Contact> = self
            .contacts
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        let removed = next.len() != self.contacts.len();

        self.persist(&next)?;
        self.contacts = next;

        if matches!(self.mode, Mode::Editing { target: EditTarget::Edit(target), .. } if target == id)
        {
            debug!(id, "deleted contact was being edited, cancelling edit");
            self.mode = Mode::Browsing;
        }

        Ok(removed)
    }

    fn replace_all(&mut self, contacts: Vec<Contact>) -> Result<(), AppError> {
        self.next_id = self.next_id.max(next_id_after(&contacts)?);
        self.contacts = contacts;
        Ok(())
    }

    fn persist(&self, contacts: &[Contact]) -> Result<(), AppError> {
        let blob = serde_json::to_string(contacts)?;
        self.storage.set(STORAGE_KEY, &blob)?;
        debug!(
            count = contacts.len(),
            medium = self.storage.get_medium(),
            "persisted snapshot"
        );
        Ok(())
    }
}

/// Rejects duplicate ids and ids too large to count past.
fn check_ids(contacts: Vec<Contact>) -> Result<Vec<Contact>, AppError> {
    let mut seen = HashSet::with_capacity(contacts.len());

    for contact in &contacts {
        if !seen.insert(contact.id) {
            return Err(AppError::MalformedRecord(format!(
                "id {} appears more than once",
                contact.id
            )));
        }
    }
    next_id_after(&contacts)?;
    Ok(contacts)
}

fn next_id_after(contacts: &[Contact]) -> Result<u64, AppError> {
    let max_id = contacts.iter().map(|c| c.id).max().unwrap_or(0);
    max_id.checked_add(1).ok_or_else(|| {
        AppError::MalformedRecord(format!("id {max_id} leaves no room for new contacts"))
    })
}
