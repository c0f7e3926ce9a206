//! Pure operations on an in-memory collection.
//!
//! These never touch storage. Callers holding a collection in memory mutate it
//! with these helpers and hand the result to [`Repository::save_all`].
//!
//! [`Repository::save_all`]: super::Repository::save_all

use chrono::{DateTime, Utc};

use crate::error::{Error, Result};
use crate::models::Entity;

/// Returns `max(0, max id) + 1`.
///
/// Fails when the largest id is already `u64::MAX`.
pub fn next_id<T: Entity>(items: &[T]) -> Result<u64> {
    after(items.iter().map(Entity::id).max().unwrap_or(0))
}

/// Returns a millisecond timestamp id for `now`, bumped past the largest
/// existing id so two items created in the same millisecond never collide.
pub fn timestamp_id<T: Entity>(items: &[T], now: DateTime<Utc>) -> Result<u64> {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let floor = match items.iter().map(Entity::id).max() {
        Some(id) => after(id)?,
        None => 0,
    };
    Ok(millis.max(floor))
}

/// The id following `id`.
pub(crate) fn after(id: u64) -> Result<u64> {
    id.checked_add(1)
        .ok_or_else(|| Error::validation(format!("No ids left after {}", id)))
}

/// Inserts `item` at the front so the newest item comes first.
pub fn add<T>(mut items: Vec<T>, item: T) -> Vec<T> {
    items.insert(0, item);
    items
}

/// Applies `patch` to the item with `id`. Missing ids leave the collection
/// unchanged.
pub fn update<T: Entity>(mut items: Vec<T>, id: u64, patch: impl FnOnce(&mut T)) -> Vec<T> {
    if let Some(item) = items.iter_mut().find(|item| item.id() == id) {
        patch(item);
    }
    items
}

/// Drops the item with `id`. Missing ids leave the collection unchanged.
pub fn remove<T: Entity>(mut items: Vec<T>, id: u64) -> Vec<T> {
    items.retain(|item| item.id() != id);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Todo;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn todos(ids: &[u64]) -> Vec<Todo> {
        ids.iter()
            .map(|id| Todo::new(*id, format!("todo {}", id)))
            .collect()
    }

    #[test]
    fn test_next_id_empty_is_one() {
        assert_eq!(next_id::<Todo>(&[]).unwrap(), 1);
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        assert_eq!(next_id(&todos(&[3, 9, 4])).unwrap(), 10);
    }

    #[test]
    fn test_ids_stay_unique_across_adds_and_deletes() {
        let mut items: Vec<Todo> = Vec::new();
        for round in 0..20u64 {
            let id = next_id(&items).unwrap();
            items = add(items, Todo::new(id, "x"));
            if round % 3 == 0 {
                // Delete something that is not the newest
                let victim = items[items.len() / 2].id;
                items = remove(items, victim);
            }
        }

        let ids: HashSet<u64> = items.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_timestamp_id() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let millis = now.timestamp_millis() as u64;

        assert_eq!(timestamp_id::<Todo>(&[], now).unwrap(), millis);
        // Same millisecond as an existing item
        assert_eq!(timestamp_id(&todos(&[millis]), now).unwrap(), millis + 1);
    }

    #[test]
    fn test_exhausted_ids_are_rejected() {
        let full = todos(&[u64::MAX]);
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        assert!(matches!(next_id(&full), Err(Error::Validation(_))));
        assert!(matches!(timestamp_id(&full, now), Err(Error::Validation(_))));
    }

    #[test]
    fn test_add_prepends() {
        let items = add(todos(&[1, 2]), Todo::new(3, "new"));
        let ids: Vec<u64> = items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_update_patches_only_matching_item() {
        let items = update(todos(&[1, 2, 3]), 2, |t| t.text = "changed".into());
        assert_eq!(items[0].text, "todo 1");
        assert_eq!(items[1].text, "changed");
        assert_eq!(items[2].text, "todo 3");
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let before = todos(&[1, 2]);
        let after = update(before.clone(), 99, |t| t.completed = true);
        assert_eq!(after, before);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let before = todos(&[1, 2, 3]);
        let after = remove(before.clone(), 42);
        assert_eq!(after, before);
    }

    #[test]
    fn test_remove_keeps_order() {
        let items = remove(todos(&[5, 4, 3]), 4);
        let ids: Vec<u64> = items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![5, 3]);
    }
}
