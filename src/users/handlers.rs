use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    body::JsonBody,
    error::ApiResult,
    state::AppState,
    users::{dto::CreateUserRequest, repo_types::User, services::validate_new_user},
};

pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(create_user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let (name, username) = validate_new_user(&payload.name, &payload.username)?;

    let user = match state.store.create_user(name, username).await {
        Ok(u) => u,
        Err(e) => {
            warn!(username = %payload.username.trim(), "username already in use");
            return Err(e);
        }
    };

    info!(user_id = %user.id, username = %user.username, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}
