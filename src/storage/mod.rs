pub mod file;
pub mod memory;
pub mod remote;

use crate::prelude::{AppError, Contact};
use std::fs;
use std::path::{Path, PathBuf};

/// Key-value substrate holding opaque snapshot blobs.
pub trait SnapshotStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;

    fn set(&self, key: &str, blob: &str) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

/// One-shot provider of the initial contact list.
pub trait SeedSource {
    fn fetch(&self) -> Result<Vec<Contact>, AppError>;

    fn describe(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageMediums {
    Json,
    Memory,
}

impl StorageMediums {
    pub fn from(str: &str) -> Result<Self, AppError> {
        match str.trim().to_lowercase().as_str() {
            "json" => Ok(StorageMediums::Json),
            "memory" | "mem" => Ok(StorageMediums::Memory),
            other => Err(AppError::Validation(format!(
                "'{other}' is not a recognized storage medium (json, memory)"
            ))),
        }
    }
}

pub fn parse_storage_type(
    medium: StorageMediums,
    data_dir: &Path,
) -> Box<dyn SnapshotStorage> {
    match medium {
        StorageMediums::Json => Box::new(file::FileStorage::new(data_dir)),
        StorageMediums::Memory => Box::new(memory::MemoryStorage::new()),
    }
}

pub fn create_file_parent(path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

pub fn key_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{key}.json"))
}
