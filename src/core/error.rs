//! Error types and error handling for the Tabula service.
//!
//! This module defines the error types used throughout the
//! application and provides conversion to HTTP status codes for
//! API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Result type alias for Tabula operations
pub type Result<T> = std::result::Result<T, TabulaError>;

/// Main error type for the Tabula service
#[derive(Error, Debug)]
pub enum TabulaError {
    #[error("a file must be uploaded in the `files` field")]
    MissingFile,

    #[error("file must be a CSV (got {0})")]
    UnsupportedMediaType(String),

    #[error("could not read upload: {0}")]
    InvalidUpload(String),

    #[error("uploaded file is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::string::FromUtf8Error),

    #[error("could not parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("query parameter `q` is required")]
    MissingQuery,

    #[error("query parameter `q` must be a single value")]
    RepeatedQuery,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl TabulaError {
    /// Convert error to appropriate HTTP status code
    ///
    /// Caller mistakes map to 4xx; only unexpected internal failures
    /// are reported as 5xx.
    pub fn status_code(&self) -> StatusCode {
        match self {
            TabulaError::MissingFile
            | TabulaError::InvalidUpload(_)
            | TabulaError::MissingQuery
            | TabulaError::RepeatedQuery => StatusCode::BAD_REQUEST,
            TabulaError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            TabulaError::InvalidEncoding(_) | TabulaError::CsvParse(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            TabulaError::ConfigError(_) | TabulaError::IoError(_) | TabulaError::TomlError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a validation error (caller-supplied input
    /// failed a precondition)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            TabulaError::MissingFile
                | TabulaError::UnsupportedMediaType(_)
                | TabulaError::InvalidUpload(_)
                | TabulaError::MissingQuery
                | TabulaError::RepeatedQuery
        )
    }

    /// Check if this is a parse error (upload bytes could not be
    /// converted into records)
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            TabulaError::InvalidEncoding(_) | TabulaError::CsvParse(_)
        )
    }
}

/// Implement IntoResponse for automatic error conversion in Axum
///
/// Every failure body carries a `message` field explaining the reason.
impl IntoResponse for TabulaError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        let body = Json(json!({
            "message": message,
        }));

        (status, body).into_response()
    }
}
