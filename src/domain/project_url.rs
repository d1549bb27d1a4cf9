//! ProjectUrl value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use url::Url;

/// A syntactically valid absolute URL attached to a project (`link` or `repo`).
///
/// # Example
///
/// ```
/// use portfolio_search_index::domain::ProjectUrl;
///
/// let url = ProjectUrl::parse("https://github.com/example/repo").unwrap();
/// assert_eq!(url.host(), Some("github.com"));
/// assert!(ProjectUrl::parse("not a url").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectUrl(Url);

impl ProjectUrl {
    /// Parse and validate a URL.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidUrl` if the value is not an absolute URL.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Url::parse(value.trim())
            .map(Self)
            .map_err(|e| ValidationError::InvalidUrl {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    /// Host component, if any.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }
}

impl Serialize for ProjectUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ProjectUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ProjectUrl::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ProjectUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
