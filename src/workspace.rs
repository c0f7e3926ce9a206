//! Everything persisted for one user, over one store.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone};

use crate::error::Result;
use crate::preferences::Preferences;
use crate::repository::{
    EventRepository, HabitRepository, JournalRepository, QuizHistoryRepository, TaskRepository,
    TodoRepository, TrackedHabitRepository,
};
use crate::stats::{Collections, DashboardStats};
use crate::storage::{FileStore, KeyValueStore};

/// One repository per collection plus the preference slots, all sharing a
/// single store.
#[derive(Debug, Clone)]
pub struct Workspace<S> {
    todos: TodoRepository<S>,
    habits: HabitRepository<S>,
    events: EventRepository<S>,
    tasks: TaskRepository<S>,
    tracked_habits: TrackedHabitRepository<S>,
    journal: JournalRepository<S>,
    quiz_history: QuizHistoryRepository<S>,
    preferences: Preferences<S>,
}

impl Workspace<FileStore> {
    /// Opens the file-backed workspace rooted at `data_dir`.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        Self::new(FileStore::new(data_dir))
    }
}

impl<S: KeyValueStore + Clone> Workspace<S> {
    pub fn new(store: S) -> Self {
        Self {
            todos: TodoRepository::new(store.clone()),
            habits: HabitRepository::new(store.clone()),
            events: EventRepository::new(store.clone()),
            tasks: TaskRepository::new(store.clone()),
            tracked_habits: TrackedHabitRepository::new(store.clone()),
            journal: JournalRepository::new(store.clone()),
            quiz_history: QuizHistoryRepository::new(store.clone()),
            preferences: Preferences::new(store),
        }
    }

    pub fn todos(&self) -> &TodoRepository<S> {
        &self.todos
    }

    pub fn habits(&self) -> &HabitRepository<S> {
        &self.habits
    }

    pub fn events(&self) -> &EventRepository<S> {
        &self.events
    }

    pub fn tasks(&self) -> &TaskRepository<S> {
        &self.tasks
    }

    pub fn tracked_habits(&self) -> &TrackedHabitRepository<S> {
        &self.tracked_habits
    }

    pub fn journal(&self) -> &JournalRepository<S> {
        &self.journal
    }

    pub fn quiz_history(&self) -> &QuizHistoryRepository<S> {
        &self.quiz_history
    }

    pub fn preferences(&self) -> &Preferences<S> {
        &self.preferences
    }

    /// Loads every collection and computes the dashboard figures for `now`.
    pub fn dashboard<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Result<DashboardStats> {
        let todos = self.todos.load_all()?;
        let habits = self.habits.load_all()?;
        let tasks = self.tasks.load_all()?;
        let tracked_habits = self.tracked_habits.load_all()?;
        let journal = self.journal.load_all()?;
        let quiz_history = self.quiz_history.load_all()?;

        Ok(DashboardStats::compute(
            Collections {
                todos: &todos,
                habits: &habits,
                tasks: &tasks,
                tracked_habits: &tracked_habits,
                journal: &journal,
                quiz_history: &quiz_history,
            },
            now,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JournalDraft, TaskDraft};
    use crate::storage::MemoryStore;
    use chrono::Utc;
    use tempfile::TempDir;

    #[test]
    fn test_repositories_share_store() {
        let store = MemoryStore::new();
        let workspace = Workspace::new(store.clone());
        workspace.todos().add_todo("Buy milk").unwrap();
        workspace.habits().add_habit("Stretch").unwrap();

        let other = Workspace::new(store);
        assert_eq!(other.todos().load_all().unwrap().len(), 1);
        assert_eq!(other.habits().load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_dashboard() {
        let workspace = Workspace::new(MemoryStore::new());
        let todo = workspace.todos().add_todo("One").unwrap();
        workspace.todos().add_todo("Two").unwrap();
        workspace.todos().toggle_todo(todo.id).unwrap();
        workspace.tasks().add_task(TaskDraft::new("Task")).unwrap();
        workspace
            .journal()
            .add_journal_entry(JournalDraft::new("Day", "Quiet"))
            .unwrap();

        let stats = workspace.dashboard(&Utc::now()).unwrap();
        assert_eq!(stats.pending_tasks, 1);
        assert_eq!(stats.journal_entries, 1);
        assert_eq!(stats.completion_rate, 50);
        assert_eq!(stats.average_quiz_score, 0);
    }

    #[test]
    fn test_open_file_workspace() {
        let dir = TempDir::new().unwrap();
        let workspace = Workspace::open(dir.path());
        workspace.todos().add_todo("Persist me").unwrap();

        let reopened = Workspace::open(dir.path());
        assert_eq!(reopened.todos().load_all().unwrap()[0].text, "Persist me");
    }
}
