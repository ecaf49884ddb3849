//! Custom error types for the cash-flow projector
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cash-flow operations
#[derive(Error, Debug)]
pub enum CashflowError {
    /// A scenario override is negative or not a number
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A base data series does not cover exactly the projection periods
    #[error("Malformed base data: '{series}' has {actual} entries, expected {expected}")]
    MalformedBaseData {
        series: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl CashflowError {
    /// Create an invalid input error for a named field
    pub fn invalid_input(field: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidInput(format!("{}: {}", field, reason))
    }

    /// Check if this is an invalid input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this is a malformed base data error
    pub fn is_malformed_base_data(&self) -> bool {
        matches!(self, Self::MalformedBaseData { .. })
    }
}

impl From<std::io::Error> for CashflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for cash-flow operations
pub type CashflowResult<T> = Result<T, CashflowError>;
