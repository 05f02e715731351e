use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::todo::Todo;

pub type SharedStore = Arc<Mutex<Store>>;

/// The authoritative in-memory collection behind the REST surface.
/// Listing order is insertion order.
#[derive(Debug, Default)]
pub struct Store {
    todos: Vec<Todo>,
}

impl Store {
    pub fn new() -> Self {
        Self { todos: Vec::new() }
    }

    /// Demo data the standalone server boots with.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        let done = store.create("Pick up dry cleaning".to_string());
        let _ = store.set_completed(done.id, true);
        store.create("Grab coffee".to_string());
        store.create("Solve world hunger".to_string());
        store
    }

    pub fn create(&mut self, description: String) -> Todo {
        let todo = Todo::new(description);
        self.todos.push(todo.clone());
        todo
    }

    /// Set the completion state for `id`, returning the resulting item.
    /// None when the id is unknown.
    pub fn set_completed(&mut self, id: Uuid, completed: bool) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        todo.completed = completed;
        Some(todo.clone())
    }

    /// Remove `id`. Returns false when nothing was removed.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.todos.len();
        self.todos.retain(|t| t.id != id);
        self.todos.len() != before
    }

    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_appends_in_insertion_order() {
        let mut store = Store::new();
        store.create("first".to_string());
        store.create("second".to_string());

        let todos = store.list();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].description, "first");
        assert_eq!(todos[1].description, "second");
    }

    #[test]
    fn test_create_starts_incomplete() {
        let mut store = Store::new();
        let todo = store.create("task".to_string());
        assert!(!todo.completed);
    }

    #[test]
    fn test_set_completed_echoes_the_new_state() {
        let mut store = Store::new();
        let todo = store.create("task".to_string());

        let updated = store.set_completed(todo.id, true).unwrap();
        assert!(updated.completed);
        assert_eq!(updated.id, todo.id);
        assert!(store.list()[0].completed);
    }

    #[test]
    fn test_set_completed_unknown_id() {
        let mut store = Store::new();
        assert!(store.set_completed(Uuid::new_v4(), true).is_none());
    }

    #[test]
    fn test_set_completed_is_idempotent() {
        let mut store = Store::new();
        let todo = store.create("task".to_string());

        let once = store.set_completed(todo.id, true).unwrap();
        let twice = store.set_completed(todo.id, true).unwrap();
        assert_eq!(once.completed, twice.completed);
    }

    #[test]
    fn test_delete_removes_only_the_target() {
        let mut store = Store::new();
        let a = store.create("a".to_string());
        let b = store.create("b".to_string());

        assert!(store.delete(a.id));

        let todos = store.list();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, b.id);
    }

    #[test]
    fn test_delete_unknown_id() {
        let mut store = Store::new();
        store.create("a".to_string());
        assert!(!store.delete(Uuid::new_v4()));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_seeded_contents() {
        let store = Store::seeded();
        let todos = store.list();

        assert_eq!(todos.len(), 3);
        assert_eq!(todos[0].description, "Pick up dry cleaning");
        assert!(todos[0].completed);
        assert_eq!(todos[1].description, "Grab coffee");
        assert!(!todos[1].completed);
        assert_eq!(todos[2].description, "Solve world hunger");
        assert!(!todos[2].completed);
    }
}
