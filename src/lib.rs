//! In-memory todo service: users identified by a `username` header, each
//! owning an ordered list of todos.

pub mod app;
pub mod body;
pub mod config;
pub mod error;
pub mod state;
pub mod store;
pub mod todos;
pub mod users;

pub use app::{build_app, serve};
pub use config::{AppConfig, StatusCodes};
pub use error::ApiError;
pub use state::AppState;
