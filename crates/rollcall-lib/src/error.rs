//! Error types for `rollcall-lib`.

use thiserror::Error;

/// Primary error type for rollcall operations.
#[derive(Error, Debug)]
pub enum RollcallError {
    // === Import Errors ===
    /// Import payload could not be parsed as JSON.
    #[error("Parse error: {reason}")]
    Parse { reason: String },

    /// Import payload parsed, but is not a valid snapshot.
    #[error("Invalid format: {reason}")]
    InvalidFormat { reason: String },

    // === Lookup Errors ===
    /// Member with the specified ID was not found.
    #[error("Member not found: {id}")]
    MemberNotFound { id: String },

    /// Session with the specified ID was not found.
    #[error("Session not found: {id}")]
    SessionNotFound { id: String },

    /// Partial ID matches multiple entities.
    #[error("Ambiguous ID '{partial}': matches {matches:?}")]
    AmbiguousId {
        partial: String,
        matches: Vec<String>,
    },

    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    // === Storage Errors ===
    /// Generic storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RollcallError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }
}

/// Result type using `RollcallError`.
pub type Result<T> = std::result::Result<T, RollcallError>;
