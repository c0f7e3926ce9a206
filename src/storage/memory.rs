//! In-memory key-value store.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{KeyValueStore, StorageError, StoreKey};

/// A store kept entirely in memory.
///
/// Clones share the same map, so a clone handed to a repository sees writes
/// made through any other clone. An optional quota caps the total number of
/// bytes held across all keys.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<StoreKey, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes once the total size would exceed
    /// `limit` bytes.
    pub fn with_quota(limit: usize) -> Self {
        Self {
            values: Arc::default(),
            quota: Some(limit),
        }
    }

    /// Returns the number of keys that have been written.
    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(values.get(&key).cloned())
    }

    fn write(&self, key: StoreKey, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        if let Some(limit) = self.quota {
            let others: usize = values
                .iter()
                .filter(|(k, _)| **k != key)
                .map(|(_, v)| v.len())
                .sum();
            let size = others + value.len();
            if size > limit {
                return Err(StorageError::QuotaExceeded { key, size, limit });
            }
        }

        values.insert(key, value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_returns_none() {
        let store = MemoryStore::new();
        assert!(store.read(StoreKey::Todos).unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_clones_share_values() {
        let store = MemoryStore::new();
        let clone = store.clone();

        clone.write(StoreKey::Notepad, "shared").unwrap();

        assert_eq!(
            store.read(StoreKey::Notepad).unwrap().as_deref(),
            Some("shared")
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_quota_rejects_oversized_write() {
        let store = MemoryStore::with_quota(10);
        store.write(StoreKey::Notepad, "12345").unwrap();

        let err = store.write(StoreKey::UserName, "123456").unwrap_err();
        assert!(matches!(
            err,
            StorageError::QuotaExceeded {
                key: StoreKey::UserName,
                size: 11,
                limit: 10
            }
        ));
        // Failed write leaves the slot untouched
        assert!(store.read(StoreKey::UserName).unwrap().is_none());
    }

    #[test]
    fn test_quota_counts_replaced_value_once() {
        let store = MemoryStore::with_quota(10);
        store.write(StoreKey::Notepad, "1234567890").unwrap();
        store.write(StoreKey::Notepad, "abcdefghij").unwrap();
        assert_eq!(
            store.read(StoreKey::Notepad).unwrap().as_deref(),
            Some("abcdefghij")
        );
    }
}
