use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, put},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    body::JsonBody,
    config::StatusCodes,
    error::ApiResult,
    state::AppState,
    todos::{
        dto::{CreateTodoRequest, UpdateTodoRequest},
        extractors::UserTodo,
        repo_types::Todo,
        services::{parse_deadline, validate_title},
    },
    users::extractors::UserAccount,
};

pub fn todo_routes() -> Router<AppState> {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/:id", put(update_todo).delete(delete_todo))
        .route("/todos/:id/done", patch(mark_done))
}

#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn list_todos(
    State(state): State<AppState>,
    UserAccount(user): UserAccount,
) -> ApiResult<(StatusCode, Json<Vec<Todo>>)> {
    let todos = state.store.list_todos(user.id).await?;
    Ok((state.config.status_codes.read(), Json(todos)))
}

#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn create_todo(
    State(state): State<AppState>,
    UserAccount(user): UserAccount,
    JsonBody(payload): JsonBody<CreateTodoRequest>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let title = validate_title(&payload.title)?;
    let deadline = parse_deadline(&payload.deadline)?;

    let todo = state.store.add_todo(user.id, Todo::new(title, deadline)).await?;

    info!(todo_id = %todo.id, "todo created");
    Ok((StatusCode::CREATED, Json(todo)))
}

#[instrument(skip_all, fields(user_id = %user.id, todo_id = %todo.id))]
pub async fn update_todo(
    State(state): State<AppState>,
    UserTodo { user, todo }: UserTodo,
    JsonBody(payload): JsonBody<UpdateTodoRequest>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let title = validate_title(&payload.title)?;
    let deadline = parse_deadline(&payload.deadline)?;

    let todo = state
        .store
        .update_todo(user.id, todo.id, title, deadline)
        .await?;

    info!("todo updated");
    Ok((state.config.status_codes.update(), Json(todo)))
}

#[instrument(skip_all, fields(user_id = %user.id, todo_id = %todo.id))]
pub async fn mark_done(
    State(state): State<AppState>,
    UserTodo { user, todo }: UserTodo,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let todo = state.store.mark_done(user.id, todo.id).await?;

    info!("todo marked done");
    Ok((state.config.status_codes.update(), Json(todo)))
}

#[instrument(skip_all, fields(user_id = %user.id, todo_id = %todo.id))]
pub async fn delete_todo(
    State(state): State<AppState>,
    UserTodo { user, todo }: UserTodo,
) -> ApiResult<Response> {
    let remaining = state.store.delete_todo(user.id, todo.id).await?;

    info!(remaining = remaining.len(), "todo deleted");
    Ok(match state.config.status_codes {
        StatusCodes::Compat => (StatusCode::NO_CONTENT, Json(remaining)).into_response(),
        StatusCodes::Strict => StatusCode::NO_CONTENT.into_response(),
    })
}
