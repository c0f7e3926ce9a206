//! Whole-workspace export and import as a single JSON document.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{
    CalendarEvent, Habit, JournalEntry, QuizResult, Settings, Task, Todo, TrackedHabit,
};
use crate::storage::KeyValueStore;
use crate::workspace::Workspace;

/// Snapshot of every collection and preference.
///
/// Missing fields deserialize to their empty defaults, so backups written by
/// older builds still import.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Backup {
    pub todos: Vec<Todo>,
    pub habits: Vec<Habit>,
    pub events: Vec<CalendarEvent>,
    pub tasks: Vec<Task>,
    pub tracked_habits: Vec<TrackedHabit>,
    pub journal_entries: Vec<JournalEntry>,
    pub notepad_content: String,
    pub settings: Settings,
    pub quiz_history: Vec<QuizResult>,
    pub dark_mode: bool,
    pub user_name: String,
    /// Informational only; ignored on import.
    pub export_date: Option<DateTime<Utc>>,
}

impl Backup {
    /// Pretty-printed JSON, as written to a backup file.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Export)
    }

    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Import)
    }
}

/// `sevenk-backup-YYYY-MM-DD.json`
pub fn default_file_name(date: NaiveDate) -> String {
    format!("sevenk-backup-{}.json", date.format("%Y-%m-%d"))
}

impl<S: KeyValueStore + Clone> Workspace<S> {
    pub fn export(&self, now: DateTime<Utc>) -> Result<Backup> {
        let prefs = self.preferences();
        let backup = Backup {
            todos: self.todos().load_all()?,
            habits: self.habits().load_all()?,
            events: self.events().load_all()?,
            tasks: self.tasks().load_all()?,
            tracked_habits: self.tracked_habits().load_all()?,
            journal_entries: self.journal().load_all()?,
            notepad_content: prefs.notepad()?,
            settings: prefs.settings()?,
            quiz_history: self.quiz_history().load_all()?,
            dark_mode: prefs.dark_mode()?,
            user_name: prefs.user_name()?.unwrap_or_default(),
            export_date: Some(now),
        };
        tracing::info!(
            "Exported {} todos, {} tasks, {} journal entries",
            backup.todos.len(),
            backup.tasks.len(),
            backup.journal_entries.len()
        );
        Ok(backup)
    }

    /// Overwrites every collection and preference with the backup's values.
    pub fn import(&self, backup: &Backup) -> Result<()> {
        self.todos().save_all(&backup.todos)?;
        self.habits().save_all(&backup.habits)?;
        self.events().save_all(&backup.events)?;
        self.tasks().save_all(&backup.tasks)?;
        self.tracked_habits().save_all(&backup.tracked_habits)?;
        self.journal().save_all(&backup.journal_entries)?;
        self.quiz_history().save_all(&backup.quiz_history)?;

        let prefs = self.preferences();
        prefs.set_notepad(&backup.notepad_content)?;
        prefs.save_settings(&backup.settings)?;
        prefs.set_dark_mode(backup.dark_mode)?;
        prefs.set_user_name(&backup.user_name)?;

        tracing::info!(
            "Imported {} todos, {} tasks, {} journal entries",
            backup.todos.len(),
            backup.tasks.len(),
            backup.journal_entries.len()
        );
        Ok(())
    }

    /// Parses `json` and imports it. Nothing is written unless the whole
    /// document parses.
    pub fn import_json(&self, json: &str) -> Result<Backup> {
        let backup = Backup::parse(json)?;
        self.import(&backup)?;
        Ok(backup)
    }
}
