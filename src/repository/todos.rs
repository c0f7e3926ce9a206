use super::{collection, require, Repository};
use crate::error::Result;
use crate::models::Todo;
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> Repository<Todo, S> {
    /// Creates a todo with the next free id. Blank text is rejected.
    pub fn add_todo(&self, text: &str) -> Result<Todo> {
        require(text, "Todo text")?;

        let items = self.load_all()?;
        let todo = Todo::new(collection::next_id(&items)?, text.trim());
        self.save_all(&collection::add(items, todo.clone()))?;
        Ok(todo)
    }

    pub fn toggle_todo(&self, id: u64) -> Result<Option<Todo>> {
        self.modify(id, Todo::toggle)
    }

    pub fn edit_todo(&self, id: u64, text: &str) -> Result<Option<Todo>> {
        require(text, "Todo text")?;
        self.modify(id, |todo| todo.text = text.trim().to_string())
    }
}
