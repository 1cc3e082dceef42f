//! Error handling for the SciQuest backend
//!
//! This module defines the main error types used throughout the application
//! and maps them onto HTTP responses at the handler boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// A single field that failed validation, with a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Main error type for the SciQuest application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<FieldViolation>),

    #[error("{0} not found")]
    NotFound(String),

    #[error("registration deadline has passed")]
    DeadlineExceeded,

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Upload error: {0}")]
    Upload(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for SciQuest operations
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Single-field validation failure.
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldViolation::new(field, message)])
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::DeadlineExceeded | AppError::Upload(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Validation(violations) => serde_json::json!({
                "message": "Validation failed",
                "errors": violations,
            }),
            AppError::DeadlineExceeded => serde_json::json!({
                "message": self.to_string(),
            }),
            AppError::NotFound(_) | AppError::Auth(_) | AppError::Upload(_) => {
                serde_json::json!({ "message": self.to_string() })
            }
            // Internal detail stays in the logs, never in the response body.
            other => {
                error!(error = %other, "Request failed");
                serde_json::json!({ "message": "Operation failed" })
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::invalid("email", "Invalid email format").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::NotFound("Candidate".to_string()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::DeadlineExceeded.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Auth("missing bearer token".to_string()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::Storage("connection refused".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_message_counts_fields() {
        let err = AppError::Validation(vec![
            FieldViolation::new("phone", "must be a 10-digit number"),
            FieldViolation::new("pin", "must be a 6-digit number"),
        ]);
        assert_eq!(err.to_string(), "validation failed for 2 field(s)");
    }
}
