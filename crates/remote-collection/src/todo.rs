//! Todo Entity
//!
//! Data structures matching the remote collection resource.

use serde::{Deserialize, Serialize};

/// A todo item (matches the remote resource)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Unique identifier, assigned by the remote service on creation
    pub id: u32,
    /// Title text, may be empty
    pub title: String,
    /// Completion status
    pub completed: bool,
}

impl Todo {
    /// Create a new incomplete todo
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }
}

/// Response of a create request; only the assigned id is consumed
#[derive(Debug, Clone, Deserialize)]
pub struct Created {
    pub id: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(1, "buy milk");
        assert_eq!(todo.id, 1);
        assert_eq!(todo.title, "buy milk");
        assert!(!todo.completed);
    }

    #[test]
    fn test_deserializes_remote_payload() {
        // jsonplaceholder also sends userId; unknown fields are ignored
        let json = r#"{"userId": 1, "id": 42, "title": "delectus aut autem", "completed": false}"#;
        let todo: Todo = serde_json::from_str(json).unwrap();
        assert_eq!(todo.id, 42);
        assert_eq!(todo.title, "delectus aut autem");
        assert!(!todo.completed);
    }

    #[test]
    fn test_created_consumes_only_id() {
        let json = r#"{"id": 201, "title": ""}"#;
        let created: Created = serde_json::from_str(json).unwrap();
        assert_eq!(created.id, 201);
    }
}
