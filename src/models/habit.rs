use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Completable, Entity};
use crate::storage::StoreKey;

/// A daily habit with a "done today" flag and a running streak.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: u64,
    pub name: String,
    pub completed: bool,
    pub streak: u32,
}

impl Habit {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completed: false,
            streak: 0,
        }
    }

    pub fn with_streak(mut self, streak: u32) -> Self {
        self.streak = streak;
        self
    }
}

impl Entity for Habit {
    const KEY: StoreKey = StoreKey::Habits;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Completable for Habit {
    fn is_completed(&self) -> bool {
        self.completed
    }
}

impl fmt::Display for Habit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(
            f,
            "[{}] {:>3}  {} ({} day streak)",
            mark, self.id, self.name, self.streak
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_habit_new() {
        let habit = Habit::new(1, "Morning Exercise");
        assert_eq!(habit.name, "Morning Exercise");
        assert!(!habit.completed);
        assert_eq!(habit.streak, 0);
    }

    #[test]
    fn test_habit_display() {
        let habit = Habit::new(4, "Meditate").with_streak(8);
        let output = format!("{}", habit);
        assert!(output.contains("Meditate"));
        assert!(output.contains("8 day streak"));
    }
}
