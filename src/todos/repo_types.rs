use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// Todo item owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub done: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub deadline: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Todo {
    pub fn new(title: String, deadline: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            done: false,
            deadline,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}
