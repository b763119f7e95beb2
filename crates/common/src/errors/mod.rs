//! Error types for the publications service
//!
//! Provides:
//! - Distinct error types for the request failure modes
//! - HTTP status code mapping
//! - A flat `{"error": "<message>"}` response body

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use sea_orm::DbErr;

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

/// Error codes for machine-readable error identification in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Request errors
    MissingField,
    InvalidFormat,
    InvalidBody,

    // Resource errors
    NotFound,

    // Database errors
    DatabaseError,
    ConnectionError,
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Expected format: {expected}. You're missing a \"{field}\" property.")]
    MissingField { field: String, expected: String },

    #[error("Expected format: {expected}. The \"{field}\" property has the wrong type.")]
    InvalidFormat { field: String, expected: String },

    #[error("{message}")]
    InvalidBody { status: StatusCode, message: String },

    // Resource errors
    #[error("{message}")]
    NotFound { message: String },

    // Database errors
    #[error("{0}")]
    Database(#[from] DbErr),

    #[error("Database connection error: {message}")]
    DatabaseConnection { message: String },
}

impl AppError {
    /// Not-found error for a paper id lookup
    pub fn paper_not_found(id: impl std::fmt::Display) -> Self {
        AppError::NotFound {
            message: format!("Could not find paper with id {}", id),
        }
    }

    /// Not-found error for a footnotes-by-paper lookup
    pub fn footnotes_not_found(paper_id: impl std::fmt::Display) -> Self {
        AppError::NotFound {
            message: format!("Could not find footnote associated with paper id {}", paper_id),
        }
    }

    /// Storage error for a path id the `integer` column type rejects
    pub fn invalid_integer(raw: &str) -> Self {
        let message = if raw.trim().parse::<i64>().is_ok() {
            format!("value \"{}\" is out of range for type integer", raw)
        } else {
            format!("invalid input syntax for type integer: \"{}\"", raw)
        };
        AppError::Database(DbErr::Type(message))
    }

    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::MissingField { .. } => ErrorCode::MissingField,
            AppError::InvalidFormat { .. } => ErrorCode::InvalidFormat,
            AppError::InvalidBody { .. } => ErrorCode::InvalidBody,
            AppError::NotFound { .. } => ErrorCode::NotFound,
            AppError::Database(_) => ErrorCode::DatabaseError,
            AppError::DatabaseConnection { .. } => ErrorCode::ConnectionError,
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 422 Unprocessable Entity
            AppError::MissingField { .. } |
            AppError::InvalidFormat { .. } => StatusCode::UNPROCESSABLE_ENTITY,

            // Whatever the body rejection reported (400, 413, 415)
            AppError::InvalidBody { status, .. } => *status,

            // 404 Not Found
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,

            // 500 Internal Server Error
            AppError::Database(_) |
            AppError::DatabaseConnection { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Check if this error should be logged at error level
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// Check if this error is a client error
    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

/// Error response body for the API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let code = self.code();
        let message = self.to_string();

        // Log based on severity
        if self.is_server_error() {
            tracing::error!(
                error = %message,
                code = ?code,
                status = status.as_u16(),
                "Server error"
            );
        } else if self.is_client_error() {
            tracing::warn!(
                error = %message,
                code = ?code,
                status = status.as_u16(),
                "Client error"
            );
        }

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
