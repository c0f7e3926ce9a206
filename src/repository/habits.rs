use super::{collection, require, Repository};
use crate::error::Result;
use crate::models::Habit;
use crate::stats::toggle_habit_streak;
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> Repository<Habit, S> {
    pub fn add_habit(&self, name: &str) -> Result<Habit> {
        require(name, "Habit name")?;

        let items = self.load_all()?;
        let habit = Habit::new(collection::next_id(&items)?, name.trim());
        self.save_all(&collection::add(items, habit.clone()))?;
        Ok(habit)
    }

    /// Flips today's flag; the streak grows only when turning it on.
    pub fn toggle_habit(&self, id: u64) -> Result<Option<Habit>> {
        self.modify(id, |habit| *habit = toggle_habit_streak(habit))
    }
}

#[cfg(test)]
mod tests {
    use crate::repository::HabitRepository;
    use crate::storage::MemoryStore;

    #[test]
    fn test_toggle_habit_streak_transitions() {
        let repo = HabitRepository::new(MemoryStore::new());
        let habit = repo.add_habit("Drink water").unwrap();
        assert_eq!(habit.streak, 0);

        let on = repo.toggle_habit(habit.id).unwrap().unwrap();
        assert!(on.completed);
        assert_eq!(on.streak, 1);

        let off = repo.toggle_habit(habit.id).unwrap().unwrap();
        assert!(!off.completed);
        assert_eq!(off.streak, 1);

        let on_again = repo.toggle_habit(habit.id).unwrap().unwrap();
        assert_eq!(on_again.streak, 2);
    }

    #[test]
    fn test_add_habit_rejects_blank_name() {
        let repo = HabitRepository::new(MemoryStore::new());
        assert!(repo.add_habit("").is_err());
        assert!(repo.load_all().unwrap().is_empty());
    }
}
