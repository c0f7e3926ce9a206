//! Personal productivity core: todos, habits, calendar events, tasks,
//! tracked habits, journal, notepad, quizzes and a Pomodoro timer, persisted
//! to a pluggable key-value store.

pub mod backup;
pub mod error;
pub mod models;
pub mod preferences;
pub mod quiz;
pub mod quotes;
pub mod repository;
pub mod stats;
pub mod storage;
pub mod timer;
pub mod workspace;

pub use backup::Backup;
pub use error::{Error, Result};
pub use preferences::Preferences;
pub use workspace::Workspace;
