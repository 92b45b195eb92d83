//! Application error types and HTTP response mapping.
//!
//! Defines the error taxonomy and implements Axum's `IntoResponse` to
//! automatically convert errors to appropriate HTTP responses with JSON
//! error bodies.
//!
//! Error mappings:
//! - `MissingToken` → 500 (configuration; normally caught before startup)
//! - `Upstream` (root listing failed) → 502
//!
//! Failed subdirectory listings never become responses: the mapper recovers
//! them locally and keeps walking.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// A single directory listing call failed.
///
/// Network errors, non-success statuses, and unparseable bodies all collapse
/// into this one shape; callers only get the path and a printable cause.
#[derive(Error, Debug, Clone)]
#[error("failed to list directory '{path}': {reason}")]
pub struct DirectoryListError {
    pub path: String,
    pub reason: String,
}

impl DirectoryListError {
    pub fn new(path: impl Into<String>, cause: impl ToString) -> Self {
        Self {
            path: path.into(),
            reason: cause.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("GitHub token is not configured")]
    MissingToken,

    #[error(transparent)]
    Upstream(#[from] DirectoryListError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::MissingToken => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            AppError::Upstream(e) => (StatusCode::BAD_GATEWAY, e.to_string()),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
