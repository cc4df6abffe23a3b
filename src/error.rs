//! Custom error types and handling
//!
//! This module defines the client's error type. Every failure a page can
//! run into is funnelled through [`AppError`] before it is turned into
//! user feedback.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Client-side validation errors
    #[error("{0}")]
    Validation(String),

    // Test-case JSON errors
    #[error(transparent)]
    Import(#[from] crate::editor::ImportError),

    // Backend errors
    #[error("Request failed: {0}")]
    Http(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    // Database bootstrap errors
    #[error("Database error: {0}")]
    Database(String),

    #[error("File error: {0}")]
    File(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),

    // Internal errors
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Import(_) => "IMPORT_ERROR",
            Self::Http(_) => "HTTP_ERROR",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::File(_) => "FILE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::MalformedResponse(err.to_string())
        } else {
            AppError::Http(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedResponse(err.to_string())
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => AppError::Database(db_err.message().to_string()),
            _ => AppError::Database(err.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::File(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
