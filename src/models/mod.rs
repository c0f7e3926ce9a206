mod event;
mod habit;
mod journal;
mod quiz;
mod settings;
mod task;
mod todo;
mod tracked_habit;

pub use event::CalendarEvent;
pub use habit::Habit;
pub use journal::{word_count, JournalDraft, JournalEntry, Mood};
pub use quiz::{Difficulty, DifficultyFilter, Question, QuizResult};
pub use settings::{FontSize, Settings, Theme};
pub use task::{parse_tags, Priority, Task, TaskDraft};
pub use todo::Todo;
pub use tracked_habit::{Frequency, HabitDraft, HistoryEntry, TrackedHabit};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::StoreKey;

/// An item that lives in a persisted collection.
///
/// Each entity kind owns exactly one store slot and is identified within it
/// by a numeric id.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    const KEY: StoreKey;

    fn id(&self) -> u64;
}

/// Something with a done/not-done flag, counted by the statistics helpers.
pub trait Completable {
    fn is_completed(&self) -> bool;
}
