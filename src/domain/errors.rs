//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided entry ID is empty.
    EmptyId,

    /// A required text field is empty or whitespace.
    EmptyText,

    /// The provided URL could not be parsed.
    InvalidUrl { value: String, reason: String },

    /// The provided project status is not one of the known values.
    UnknownStatus(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::EmptyText => write!(f, "value must be a non-empty string"),
            Self::InvalidUrl { value, reason } => write!(f, "Invalid URL '{}': {}", value, reason),
            Self::UnknownStatus(status) => write!(
                f,
                "Unknown status '{}' (expected completed, in-progress or archived)",
                status
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
