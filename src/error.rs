use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("Username already in use.")]
    DuplicateUsername,

    #[error("User not found.")]
    UserNotFound,

    #[error("Todo not found.")]
    TodoNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UserNotFound | ApiError::TodoNotFound => StatusCode::NOT_FOUND,
            ApiError::DuplicateUsername | ApiError::Validation(_) | ApiError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_variants_to_client_errors() {
        assert_eq!(ApiError::DuplicateUsername.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::UserNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::TodoNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Validation("title is required".into()).status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn error_body_shape() {
        let body = ErrorBody {
            error: ApiError::UserNotFound.to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "User not found." }));
    }
}
