use crate::models::ErrorBody;
use axum::{http::StatusCode, Json};
use std::path::Path;
use thiserror::Error;

/// Route-boundary error. Rendered as `{"error": message}` with `status`.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to load quotes data from {path}: {reason}")]
    DataUnavailable { path: String, reason: String },

    #[error("No quotes available")]
    NoQuotes,
}

impl StoreError {
    pub fn unavailable(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::DataUnavailable {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DataUnavailable { .. } => Self::internal("Failed to load quotes data"),
            StoreError::NoQuotes => Self::not_found("No quotes available"),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}
