//! Error types for the search index builder.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised while loading content collections.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// An entry violates its collection schema
    #[error("Validation failed for entry '{entry_id}' (field `{field}`): {reason}")]
    Validation {
        entry_id: String,
        field: String,
        reason: String,
    },

    /// The content store cannot be reached or enumerated
    #[error("Content source unavailable: {0}")]
    SourceUnavailable(String),

    /// Two documents in the assembled index share an id
    #[error("Duplicate document id: {0}")]
    DuplicateId(String),
}

impl ContentError {
    /// Build a validation error for a single entry field.
    pub fn validation(
        entry_id: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::Validation {
            entry_id: entry_id.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while writing build output.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Filesystem write failed
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize output
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ContentError
pub type ContentResult<T> = Result<T, ContentError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with OutputError
pub type OutputResult<T> = Result<T, OutputError>;
