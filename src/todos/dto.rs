use serde::Deserialize;

/// Request body for todo creation.
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: String,
    pub deadline: String,
}

/// Request body for todo update; both fields are overwritten.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title: String,
    pub deadline: String,
}
