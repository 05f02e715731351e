use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do entry. The store assigns `id` and `created_at` on creation;
/// `description` never changes afterwards, `completed` only changes through
/// the update operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub id: Uuid,
    pub description: String,
    pub completed: bool,
    /// Unix timestamp of creation. Informational only; the store keeps
    /// insertion order itself.
    pub created_at: i64,
}

impl Todo {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            completed: false,
            created_at: Utc::now().timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_incomplete() {
        let todo = Todo::new("buy milk");
        assert_eq!(todo.description, "buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Todo::new("a");
        let b = Todo::new("b");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_wire_shape_uses_camel_case() {
        let todo = Todo::new("task");
        let json = serde_json::to_string(&todo).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"description\""));
        assert!(json.contains("\"completed\""));
    }

    #[test]
    fn test_deserializes_wire_shape() {
        let json = r#"{
            "id": "2f1f9e24-7e06-4a39-b2d3-111111111111",
            "description": "grab coffee",
            "completed": true,
            "createdAt": 2
        }"#;

        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.description, "grab coffee");
        assert!(todo.completed);
        assert_eq!(todo.created_at, 2);
    }
}
