use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Completable, Entity};
use crate::storage::StoreKey;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub text: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

impl Entity for Todo {
    const KEY: StoreKey = StoreKey::Todos;

    fn id(&self) -> u64 {
        self.id
    }
}

impl Completable for Todo {
    fn is_completed(&self) -> bool {
        self.completed
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.completed { "x" } else { " " };
        write!(f, "[{}] {:>3}  {}", mark, self.id, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_new() {
        let todo = Todo::new(1, "Write report");
        assert_eq!(todo.id, 1);
        assert_eq!(todo.text, "Write report");
        assert!(!todo.completed);
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let original = Todo::new(7, "Call dentist");
        let mut todo = original.clone();

        todo.toggle();
        assert!(todo.completed);
        todo.toggle();

        assert_eq!(todo, original);
    }

    #[test]
    fn test_todo_display() {
        let mut todo = Todo::new(3, "Buy milk");
        assert!(format!("{}", todo).starts_with("[ ]"));
        todo.toggle();
        let output = format!("{}", todo);
        assert!(output.starts_with("[x]"));
        assert!(output.contains("Buy milk"));
    }

    #[test]
    fn test_todo_json_shape() {
        let todo = Todo::new(2, "Plan week");
        let json = serde_json::to_string(&todo).unwrap();
        assert_eq!(json, r#"{"id":2,"text":"Plan week","completed":false}"#);
    }
}
