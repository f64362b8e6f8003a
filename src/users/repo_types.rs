use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::todos::repo_types::Todo;

/// User record held in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,         // generated at creation
    pub name: String,     // display name
    pub username: String, // unique lookup key
    pub todos: Vec<Todo>, // insertion order
}

impl User {
    pub fn new(name: String, username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            username,
            todos: Vec::new(),
        }
    }
}
