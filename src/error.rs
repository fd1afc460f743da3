// src/error.rs

//! Unified error handling for the advisory application.

use std::fmt;

use thiserror::Error;

/// Result type alias for advisory operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Raw advisory record missing a required field
    #[error("Malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },

    /// Toggle requested for a category that cannot be toggled
    #[error("Unknown filter {code}: {reason}")]
    UnknownFilter { code: u32, reason: String },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a malformed record error with its batch position.
    pub fn malformed_record(index: usize, reason: impl fmt::Display) -> Self {
        Self::MalformedRecord {
            index,
            reason: reason.to_string(),
        }
    }

    /// Create an unknown filter error.
    pub fn unknown_filter(code: u32, reason: impl Into<String>) -> Self {
        Self::UnknownFilter {
            code,
            reason: reason.into(),
        }
    }
}
