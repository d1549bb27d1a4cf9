//! EntryId value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// Everything except letters, marks, digits, connector punctuation (`_`),
// whitespace and `-` is dropped from a slug segment.
static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\p{L}\p{M}\p{N}\p{Pc}\s-]").expect("Failed to compile slug regex")
});

/// A type-safe wrapper for content entry IDs.
///
/// An entry ID is the entry's source path relative to its collection
/// directory, using `/` as separator (e.g. `posts/hello-world.md`).
/// It is stable across rebuilds as long as the file is not moved.
///
/// # Example
///
/// ```
/// use portfolio_search_index::domain::EntryId;
///
/// let id = EntryId::new("posts/Hello World.mdx").unwrap();
/// assert_eq!(id.extension(), "mdx");
/// assert_eq!(id.slug(), "posts/hello-world");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(String);

impl EntryId {
    /// Create a new EntryId, validating that it's not empty.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyId` if the provided ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// The text after the last `.` of the ID.
    ///
    /// An ID without any `.` is returned whole.
    pub fn extension(&self) -> &str {
        self.0.rsplit('.').next().unwrap_or(&self.0)
    }

    /// URL slug derived from the ID.
    ///
    /// The file extension is dropped. Each path segment is lowercased, stripped
    /// of punctuation and symbols, and has every whitespace character replaced
    /// by `-`. A trailing `/index` segment is removed, so `posts/index.md`
    /// maps to `posts`.
    pub fn slug(&self) -> String {
        let without_ext = match self.0.rfind('.') {
            Some(dot) if !self.0[dot..].contains('/') => &self.0[..dot],
            _ => self.0.as_str(),
        };

        let slug = without_ext
            .split('/')
            .map(slug_segment)
            .collect::<Vec<_>>()
            .join("/");

        match slug.strip_suffix("/index") {
            Some(parent) => parent.to_string(),
            None => slug,
        }
    }
}

fn slug_segment(segment: &str) -> String {
    let lowered = segment.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "")
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}

// Serde support - serialize as string
impl Serialize for EntryId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        EntryId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for EntryId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_valid() {
        let id = EntryId::new("hello.md").unwrap();
        assert_eq!(id.as_str(), "hello.md");
    }

    #[test]
    fn test_entry_id_empty_fails() {
        assert_eq!(EntryId::new(""), Err(ValidationError::EmptyId));
        assert_eq!(EntryId::new("   "), Err(ValidationError::EmptyId));
    }

    #[test]
    fn test_extension() {
        assert_eq!(EntryId::new("post.md").unwrap().extension(), "md");
        assert_eq!(EntryId::new("nested/post.mdx").unwrap().extension(), "mdx");
        assert_eq!(EntryId::new("archive.v2.md").unwrap().extension(), "md");
    }

    #[test]
    fn test_extension_without_dot_is_whole_id() {
        assert_eq!(EntryId::new("p1").unwrap().extension(), "p1");
    }

    #[test]
    fn test_slug() {
        assert_eq!(EntryId::new("hello-world.md").unwrap().slug(), "hello-world");
        assert_eq!(
            EntryId::new("2024/My First Post.mdx").unwrap().slug(),
            "2024/my-first-post"
        );
        assert_eq!(EntryId::new("p1").unwrap().slug(), "p1");
        assert_eq!(
            EntryId::new("Oil & Gas_ML.md").unwrap().slug(),
            "oil--gas_ml"
        );
        assert_eq!(EntryId::new("What's New?.md").unwrap().slug(), "whats-new");
    }

    #[test]
    fn test_slug_keeps_underscores() {
        assert_eq!(EntryId::new("my_post.md").unwrap().slug(), "my_post");
        assert_eq!(EntryId::new("__init__.md").unwrap().slug(), "__init__");
    }

    #[test]
    fn test_slug_drops_trailing_index() {
        assert_eq!(EntryId::new("posts/index.md").unwrap().slug(), "posts");
        assert_eq!(EntryId::new("a/b/Index.mdx").unwrap().slug(), "a/b");
        assert_eq!(EntryId::new("index.md").unwrap().slug(), "index");
        assert_eq!(
            EntryId::new("indexing/intro.md").unwrap().slug(),
            "indexing/intro"
        );
    }

    #[test]
    fn test_slug_ignores_dots_in_directories() {
        assert_eq!(EntryId::new("v1.2/notes").unwrap().slug(), "v12/notes");
    }

    #[test]
    fn test_entry_id_serialization() {
        let id = EntryId::new("a.md").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"a.md\"");

        let parsed: Result<EntryId, _> = serde_json::from_str("\"\"");
        assert!(parsed.is_err());
    }
}
