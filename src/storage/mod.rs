//! Key-value persistence for sevenk.
//!
//! Every collection and preference lives under one [`StoreKey`]. A store only
//! knows how to read and overwrite whole string values; JSON encoding is the
//! repositories' job.
//!
//! Two implementations are provided:
//! - [`FileStore`]: one file per key inside a data directory
//! - [`MemoryStore`]: a shared in-memory map, used as a test double

mod file;
mod key;
mod memory;

pub use file::FileStore;
pub use key::StoreKey;
pub use memory::MemoryStore;

use std::io;
use std::path::PathBuf;

/// Synchronous string key-value storage.
///
/// `read` returns `Ok(None)` for a key that was never written. `write` always
/// overwrites the full value; a failed write is reported once and never
/// retried.
pub trait KeyValueStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError>;

    fn write(&self, key: StoreKey, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: StoreKey, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }
}

/// Errors that can occur while reading or writing the store.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error reading or writing a file.
    IoError(PathBuf, io::Error),
    /// The write would exceed the store's size limit.
    QuotaExceeded { key: StoreKey, size: usize, limit: usize },
    /// The store cannot be accessed at all.
    Unavailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::IoError(path, e) => {
                write!(f, "I/O error for {}: {}", path.display(), e)
            }
            StorageError::QuotaExceeded { key, size, limit } => {
                write!(
                    f,
                    "Storage quota exceeded writing {} ({} bytes, limit {})",
                    key, size, limit
                )
            }
            StorageError::Unavailable(e) => write!(f, "Storage unavailable: {}", e),
        }
    }
}

impl std::error::Error for StorageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StorageError::IoError(_, e) => Some(e),
            _ => None,
        }
    }
}
