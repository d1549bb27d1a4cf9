//! RequiredText value object.

use super::errors::ValidationError;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Deref;

/// A text field that must be present and not blank (`title`, `description`).
///
/// The original text is kept as written; only the emptiness check trims.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequiredText(String);

impl RequiredText {
    /// Create a new RequiredText.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyText` for an empty or whitespace-only value.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyText);
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for RequiredText {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Serialize for RequiredText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for RequiredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text() {
        let text = RequiredText::new("Homelab notes").unwrap();
        assert_eq!(text.as_str(), "Homelab notes");
        assert_eq!(text.len(), 13);
    }

    #[test]
    fn test_required_text_rejects_blank() {
        assert_eq!(RequiredText::new(""), Err(ValidationError::EmptyText));
        assert_eq!(RequiredText::new(" \n\t"), Err(ValidationError::EmptyText));
    }

    #[test]
    fn test_required_text_keeps_surrounding_whitespace() {
        let text = RequiredText::new("  padded ").unwrap();
        assert_eq!(text.into_inner(), "  padded ");
    }
}
