use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use tracing::warn;

use crate::{error::ApiError, state::AppState, users::repo_types::User};

/// Name of the request header carrying the caller's username.
pub const USERNAME_HEADER: &str = "username";

/// Resolves the `username` header to a stored user.
pub struct UserAccount(pub User);

#[async_trait]
impl FromRequestParts<AppState> for UserAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(username) = parts
            .headers
            .get(USERNAME_HEADER)
            .and_then(|h| h.to_str().ok())
        else {
            warn!("missing or unreadable username header");
            return Err(ApiError::UserNotFound);
        };

        match state.store.find_by_username(username).await {
            Some(user) => Ok(UserAccount(user)),
            None => {
                warn!(%username, "unknown username");
                Err(ApiError::UserNotFound)
            }
        }
    }
}
