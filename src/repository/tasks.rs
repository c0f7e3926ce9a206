use chrono::{DateTime, Utc};

use super::{collection, require, Repository};
use crate::error::Result;
use crate::models::{Task, TaskDraft};
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> Repository<Task, S> {
    pub fn add_task(&self, draft: TaskDraft) -> Result<Task> {
        self.add_task_at(draft, Utc::now())
    }

    pub fn add_task_at(&self, draft: TaskDraft, now: DateTime<Utc>) -> Result<Task> {
        require(&draft.title, "Task title")?;

        let items = self.load_all()?;
        let task = draft.into_task(collection::timestamp_id(&items, now)?, now);
        self.save_all(&collection::add(items, task.clone()))?;
        Ok(task)
    }

    pub fn toggle_task(&self, id: u64) -> Result<Option<Task>> {
        self.modify(id, Task::toggle)
    }

    /// Tasks whose title or description contains `query`, ignoring case.
    pub fn search_tasks(&self, query: &str) -> Result<Vec<Task>> {
        let mut tasks = self.load_all()?;
        tasks.retain(|task| task.matches(query));
        Ok(tasks)
    }
}
