use super::*;

use std::fs::OpenOptions;
use std::io::{Read, Write};
use tracing::debug;

/// Stores each key as `<dir>/<key>.json`.
pub struct FileStorage {
    pub medium: String,
    pub dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &Path) -> Self {
        Self {
            medium: "json".to_string(),
            dir: dir.to_path_buf(),
        }
    }
}

impl SnapshotStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let path = key_path(&self.dir, key);
        if !fs::exists(&path)? {
            debug!(path = %path.display(), "no snapshot file");
            return Ok(None);
        }

        let mut file = OpenOptions::new().read(true).open(&path)?;
        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // An empty file was never written by us; treat it like a missing one
        if data.trim().is_empty() {
            return Ok(None);
        }

        debug!(path = %path.display(), bytes = data.len(), "read snapshot");
        Ok(Some(data))
    }

    fn set(&self, key: &str, blob: &str) -> Result<(), AppError> {
        let path = key_path(&self.dir, key);
        create_file_parent(&path)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        file.write_all(blob.as_bytes())?;

        debug!(path = %path.display(), bytes = blob.len(), "wrote snapshot");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
