use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use tracing::warn;
use uuid::Uuid;

use crate::{
    error::ApiError,
    state::AppState,
    todos::repo_types::Todo,
    users::{extractors::UserAccount, repo_types::User},
};

/// A todo from the `:id` path segment, resolved inside the caller's account.
///
/// The username header is resolved first; a path id that is not a UUID is
/// treated the same as one that matches nothing.
pub struct UserTodo {
    pub user: User,
    pub todo: Todo,
}

#[async_trait]
impl FromRequestParts<AppState> for UserTodo {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let UserAccount(user) = UserAccount::from_request_parts(parts, state).await?;

        let Path(raw_id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::TodoNotFound)?;

        let todo = Uuid::parse_str(&raw_id)
            .ok()
            .and_then(|id| user.find_todo(id).cloned());

        match todo {
            Some(todo) => Ok(UserTodo { user, todo }),
            None => {
                warn!(user_id = %user.id, todo_id = %raw_id, "todo not found");
                Err(ApiError::TodoNotFound)
            }
        }
    }
}
