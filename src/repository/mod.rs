//! Repositories: one per entity kind, each owning a single store slot.
//!
//! Every mutation is a full read-modify-write of the collection. Malformed
//! stored JSON is treated as an empty collection and logged; it is never a
//! fatal error.

pub mod collection;
mod events;
mod habits;
mod journal;
mod quiz_history;
mod tasks;
mod todos;
mod tracked_habits;

pub use collection::{next_id, timestamp_id};
pub use tracked_habits::Completion;

use std::marker::PhantomData;

use crate::error::{Error, Result};
use crate::models::{
    CalendarEvent, Entity, Habit, JournalEntry, QuizResult, Task, Todo, TrackedHabit,
};
use crate::storage::{KeyValueStore, StoreKey};

pub type TodoRepository<S> = Repository<Todo, S>;
pub type HabitRepository<S> = Repository<Habit, S>;
pub type EventRepository<S> = Repository<CalendarEvent, S>;
pub type TaskRepository<S> = Repository<Task, S>;
pub type TrackedHabitRepository<S> = Repository<TrackedHabit, S>;
pub type JournalRepository<S> = Repository<JournalEntry, S>;
pub type QuizHistoryRepository<S> = Repository<QuizResult, S>;

/// Load/save/add/update/delete for one entity kind over an injected store.
#[derive(Debug)]
pub struct Repository<T, S> {
    store: S,
    _entity: PhantomData<fn() -> T>,
}

impl<T, S: Clone> Clone for Repository<T, S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity, S: KeyValueStore> Repository<T, S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }

    /// The store slot this repository owns.
    pub fn key(&self) -> StoreKey {
        T::KEY
    }

    /// Reads the whole collection.
    ///
    /// A missing slot and a malformed one both yield an empty collection.
    pub fn load_all(&self) -> Result<Vec<T>> {
        let Some(raw) = self.store.read(T::KEY)? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                tracing::warn!("Ignoring malformed data in {}: {}", T::KEY, e);
                Ok(Vec::new())
            }
        }
    }

    /// Overwrites the whole collection, preserving order.
    pub fn save_all(&self, items: &[T]) -> Result<()> {
        let json = serde_json::to_string(items).map_err(|source| Error::Serialize {
            key: T::KEY,
            source,
        })?;
        self.store.write(T::KEY, &json)?;
        tracing::debug!("Saved {} item(s) to {}", items.len(), T::KEY);
        Ok(())
    }

    pub fn find(&self, id: u64) -> Result<Option<T>> {
        Ok(self.load_all()?.into_iter().find(|item| item.id() == id))
    }

    /// Prepends `item` and persists.
    pub fn insert(&self, item: T) -> Result<T> {
        let items = collection::add(self.load_all()?, item.clone());
        self.save_all(&items)?;
        Ok(item)
    }

    /// Patches the item with `id` and persists.
    ///
    /// Returns the updated item, or `None` without writing if no item matched.
    pub fn modify(&self, id: u64, patch: impl FnOnce(&mut T)) -> Result<Option<T>> {
        let mut items = self.load_all()?;
        let Some(item) = items.iter_mut().find(|item| item.id() == id) else {
            return Ok(None);
        };
        patch(item);
        let updated = item.clone();

        self.save_all(&items)?;
        Ok(Some(updated))
    }

    /// Swaps in `item` for the stored item with the same id.
    pub fn replace(&self, item: T) -> Result<bool> {
        let id = item.id();
        Ok(self.modify(id, |existing| *existing = item)?.is_some())
    }

    /// Removes the item with `id` and persists. Returns false, without
    /// writing, if no item matched.
    pub fn delete(&self, id: u64) -> Result<bool> {
        let items = self.load_all()?;
        let before = items.len();
        let items = collection::remove(items, id);
        if items.len() == before {
            return Ok(false);
        }

        self.save_all(&items)?;
        Ok(true)
    }
}

/// Fails with a validation error naming `field` when `value` is blank.
pub(crate) fn require(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStore, StorageError};

    fn repo() -> (TodoRepository<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        (Repository::new(store.clone()), store)
    }

    #[test]
    fn test_load_missing_is_empty() {
        let (repo, _) = repo();
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        let (repo, store) = repo();
        store.write(StoreKey::Todos, "{not json").unwrap();
        assert!(repo.load_all().unwrap().is_empty());

        store
            .write(StoreKey::Todos, r#"[{"id":"wrong type"}]"#)
            .unwrap();
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_save_load_roundtrip_is_idempotent() {
        let (repo, store) = repo();
        let mut done = Todo::new(2, "done");
        done.completed = true;
        let items = vec![Todo::new(3, "newest"), done, Todo::new(1, "oldest")];

        repo.save_all(&items).unwrap();
        let first = store.read(StoreKey::Todos).unwrap();
        repo.save_all(&repo.load_all().unwrap()).unwrap();
        let second = store.read(StoreKey::Todos).unwrap();

        assert_eq!(repo.load_all().unwrap(), items);
        assert_eq!(first, second);
    }

    #[test]
    fn test_insert_prepends_and_persists() {
        let (repo, _) = repo();
        repo.insert(Todo::new(1, "first")).unwrap();
        repo.insert(Todo::new(2, "second")).unwrap();

        let items = repo.load_all().unwrap();
        assert_eq!(items[0].text, "second");
        assert_eq!(items[1].text, "first");
    }

    #[test]
    fn test_modify_and_find() {
        let (repo, _) = repo();
        repo.insert(Todo::new(1, "draft")).unwrap();

        let updated = repo.modify(1, |t| t.text = "final".into()).unwrap();
        assert_eq!(updated.unwrap().text, "final");
        assert_eq!(repo.find(1).unwrap().unwrap().text, "final");
    }

    #[test]
    fn test_modify_missing_does_not_write() {
        let (repo, store) = repo();
        assert!(repo.modify(5, |t| t.completed = true).unwrap().is_none());
        assert!(store.read(StoreKey::Todos).unwrap().is_none());
    }

    #[test]
    fn test_replace() {
        let (repo, _) = repo();
        repo.insert(Todo::new(1, "old")).unwrap();

        assert!(repo.replace(Todo::new(1, "new")).unwrap());
        assert!(!repo.replace(Todo::new(2, "ghost")).unwrap());
        assert_eq!(repo.load_all().unwrap(), vec![Todo::new(1, "new")]);
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let (repo, _) = repo();
        repo.insert(Todo::new(1, "keep")).unwrap();
        let before = repo.load_all().unwrap();

        assert!(!repo.delete(99).unwrap());
        assert_eq!(repo.load_all().unwrap(), before);
    }

    #[test]
    fn test_delete_existing() {
        let (repo, _) = repo();
        repo.insert(Todo::new(1, "a")).unwrap();
        repo.insert(Todo::new(2, "b")).unwrap();

        assert!(repo.delete(1).unwrap());
        assert_eq!(repo.load_all().unwrap(), vec![Todo::new(2, "b")]);
    }

    #[test]
    fn test_quota_failure_surfaces_and_keeps_old_value() {
        let store = MemoryStore::with_quota(64);
        let repo: TodoRepository<_> = Repository::new(store.clone());
        repo.insert(Todo::new(1, "short")).unwrap();

        let err = repo.insert(Todo::new(2, "x".repeat(100))).unwrap_err();
        assert!(matches!(
            err,
            Error::Storage(StorageError::QuotaExceeded { .. })
        ));
        assert_eq!(repo.load_all().unwrap(), vec![Todo::new(1, "short")]);
    }

    #[test]
    fn test_require() {
        assert!(require("text", "Title").is_ok());
        let err = require("   ", "Title").unwrap_err();
        assert_eq!(err.to_string(), "Title is required");
    }
}
