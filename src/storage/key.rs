//! Named persistence slots.

use std::fmt;

/// One slot in the key-value store.
///
/// Collections hold a JSON array. `DarkMode`, `UserName` and `Notepad` hold
/// plain strings. `Settings` holds a JSON object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Todos,
    Habits,
    Events,
    Tasks,
    TrackedHabits,
    Journal,
    QuizHistory,
    DarkMode,
    UserName,
    Notepad,
    Settings,
}

impl StoreKey {
    pub const ALL: [StoreKey; 11] = [
        StoreKey::Todos,
        StoreKey::Habits,
        StoreKey::Events,
        StoreKey::Tasks,
        StoreKey::TrackedHabits,
        StoreKey::Journal,
        StoreKey::QuizHistory,
        StoreKey::DarkMode,
        StoreKey::UserName,
        StoreKey::Notepad,
        StoreKey::Settings,
    ];

    /// Returns the raw key string, also used as the file name on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Todos => "sevenk_todos",
            StoreKey::Habits => "sevenk_habits",
            StoreKey::Events => "sevenk_events",
            StoreKey::Tasks => "sevenk_tasks",
            StoreKey::TrackedHabits => "sevenk_tracked_habits",
            StoreKey::Journal => "sevenk_journal",
            StoreKey::QuizHistory => "sevenk_quiz_history",
            StoreKey::DarkMode => "sevenk_dark_mode",
            StoreKey::UserName => "sevenk_user_name",
            StoreKey::Notepad => "sevenk_notepad",
            StoreKey::Settings => "sevenk_settings",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
