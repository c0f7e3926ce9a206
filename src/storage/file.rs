//! File-backed key-value store.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StorageError, StoreKey};

/// Stores each key as a file named after the key inside `data_dir`.
#[derive(Clone, Debug)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the full path for a key.
    pub fn path(&self, key: StoreKey) -> PathBuf {
        self.data_dir.join(key.as_str())
    }

    /// Checks if a key has been written.
    pub fn exists(&self, key: StoreKey) -> bool {
        self.path(key).exists()
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        let path = self.path(key);

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::IoError(path, e)),
        }
    }

    /// Creates the data directory if it doesn't exist.
    fn write(&self, key: StoreKey, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)
            .map_err(|e| StorageError::IoError(self.data_dir.clone(), e))?;

        let path = self.path(key);
        fs::write(&path, value).map_err(|e| StorageError::IoError(path, e))?;
        tracing::debug!("Wrote {} bytes to {}", value.len(), key);

        Ok(())
    }
}
