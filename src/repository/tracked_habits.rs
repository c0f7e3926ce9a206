use chrono::{DateTime, TimeZone, Utc};

use super::{collection, require, Repository};
use crate::error::Result;
use crate::models::{HabitDraft, TrackedHabit};
use crate::storage::KeyValueStore;

/// What happened when a tracked habit was marked complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    Completed(TrackedHabit),
    AlreadyDoneToday(TrackedHabit),
    NotFound,
}

impl<S: KeyValueStore> Repository<TrackedHabit, S> {
    pub fn add_tracked_habit(&self, draft: HabitDraft) -> Result<TrackedHabit> {
        self.add_tracked_habit_at(draft, Utc::now())
    }

    pub fn add_tracked_habit_at(
        &self,
        draft: HabitDraft,
        now: DateTime<Utc>,
    ) -> Result<TrackedHabit> {
        require(&draft.title, "Habit title")?;

        let items = self.load_all()?;
        let habit = draft.into_habit(collection::timestamp_id(&items, now)?, now);
        self.save_all(&collection::add(items, habit.clone()))?;
        Ok(habit)
    }

    /// Completes the habit for `now`'s calendar day.
    ///
    /// A second completion on the same day changes nothing and writes
    /// nothing.
    pub fn complete_tracked_habit<Tz: TimeZone>(
        &self,
        id: u64,
        now: &DateTime<Tz>,
    ) -> Result<Completion> {
        let mut items = self.load_all()?;
        let Some(habit) = items.iter_mut().find(|habit| habit.id == id) else {
            return Ok(Completion::NotFound);
        };

        if !habit.complete_at(now) {
            return Ok(Completion::AlreadyDoneToday(habit.clone()));
        }
        let completed = habit.clone();

        self.save_all(&items)?;
        Ok(Completion::Completed(completed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::TrackedHabitRepository;
    use crate::storage::MemoryStore;

    fn at(d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_complete_once_per_day() {
        let repo = TrackedHabitRepository::new(MemoryStore::new());
        let habit = repo
            .add_tracked_habit_at(HabitDraft::new("Run"), at(1, 6))
            .unwrap();

        let first = repo.complete_tracked_habit(habit.id, &at(2, 7)).unwrap();
        let Completion::Completed(done) = first else {
            panic!("expected a completion");
        };
        assert_eq!(done.streak, 1);

        let second = repo.complete_tracked_habit(habit.id, &at(2, 20)).unwrap();
        assert!(matches!(second, Completion::AlreadyDoneToday(ref h) if h.streak == 1));

        let stored = repo.find(habit.id).unwrap().unwrap();
        assert_eq!(stored.history.len(), 1);
    }

    #[test]
    fn test_complete_missing_habit() {
        let repo = TrackedHabitRepository::new(MemoryStore::new());
        assert_eq!(
            repo.complete_tracked_habit(1, &at(1, 1)).unwrap(),
            Completion::NotFound
        );
    }
}
