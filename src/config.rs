//! Runtime settings resolved from command-line flags, environment variables
//! and an optional `.env` file.

use std::path::PathBuf;

use crate::domain::store::ContactStore;
use crate::errors::AppError;
use crate::storage::{
    SeedSource, StorageMediums,
    memory::NoSeed,
    parse_storage_type,
    remote::{DEFAULT_SEED_URL, RemoteSeed},
};

pub const DEFAULT_DATA_DIR: &str = "./.instance";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub medium: StorageMediums,
    pub data_dir: PathBuf,
    /// `None` disables seeding.
    pub seed_url: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            medium: StorageMediums::Json,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            seed_url: Some(DEFAULT_SEED_URL.to_string()),
        }
    }
}

impl Settings {
    pub fn new(
        medium: &str,
        data_dir: PathBuf,
        seed_url: &str,
        no_seed: bool,
    ) -> Result<Self, AppError> {
        let seed_url = seed_url.trim();

        Ok(Self {
            medium: StorageMediums::from(medium)?,
            data_dir,
            seed_url: if no_seed || seed_url.is_empty() {
                None
            } else {
                Some(seed_url.to_string())
            },
        })
    }

    /// Builds an uninitialized store wired to the configured collaborators.
    pub fn open_store(&self) -> Result<ContactStore, AppError> {
        let storage = parse_storage_type(self.medium, &self.data_dir);

        let seed: Box<dyn SeedSource> = match &self.seed_url {
            Some(url) => Box::new(RemoteSeed::new(url)?),
            None => Box::new(NoSeed),
        };

        Ok(ContactStore::new(storage, seed))
    }
}

/// Loads `.env` from the working directory if present.
pub fn load_dotenv() {
    dotenv::dotenv().ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_seed_flag_disables_seeding() -> Result<(), AppError> {
        let settings = Settings::new("json", PathBuf::from("/tmp/x"), DEFAULT_SEED_URL, true)?;
        assert_eq!(settings.seed_url, None);
        Ok(())
    }

    #[test]
    fn blank_seed_url_disables_seeding() -> Result<(), AppError> {
        let settings = Settings::new("memory", PathBuf::from("/tmp/x"), "  ", false)?;
        assert_eq!(settings.seed_url, None);
        assert_eq!(settings.medium, StorageMediums::Memory);
        Ok(())
    }

    #[test]
    fn unknown_medium_is_rejected() {
        assert!(matches!(
            Settings::new("txt", PathBuf::from("/tmp/x"), DEFAULT_SEED_URL, false),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn bad_seed_url_fails_when_opening() -> Result<(), AppError> {
        let settings = Settings::new("memory", PathBuf::from("/tmp/x"), "nope", false)?;
        assert!(matches!(
            settings.open_store(),
            Err(AppError::Validation(_))
        ));
        Ok(())
    }

    #[test]
    fn defaults_point_at_demo_api() {
        let settings = Settings::default();
        assert_eq!(settings.seed_url.as_deref(), Some(DEFAULT_SEED_URL));
        assert_eq!(settings.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }
}
