//! Validated content entries for the blog and project collections.

use crate::domain::{EntryId, ProjectUrl, RequiredText, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two content collections that feed the search index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Blog,
    Project,
}

impl ContentKind {
    /// Both kinds, in index order (blog documents precede project documents).
    pub const ALL: [ContentKind; 2] = [ContentKind::Blog, ContentKind::Project];

    /// Name of the collection directory in the content store.
    pub fn collection_name(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Project => "projects",
        }
    }

    /// Discriminator used in search documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blog => "blog",
            Self::Project => "project",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Completed,
    InProgress,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in-progress",
            Self::Archived => "archived",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "completed" => Ok(Self::Completed),
            "in-progress" => Ok(Self::InProgress),
            "archived" => Ok(Self::Archived),
            other => Err(ValidationError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A blog post with all schema defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct BlogEntry {
    pub id: EntryId,
    pub title: RequiredText,
    pub description: RequiredText,
    /// Raw markdown body, frontmatter excluded
    pub body: String,
    pub tags: Vec<String>,
    pub draft: bool,
    pub featured: bool,
    /// Publication date
    pub date: Option<DateTime<Utc>>,
    pub updated_date: Option<DateTime<Utc>>,
    pub hero_image: Option<String>,
}

impl BlogEntry {
    /// Create a published, non-featured, untagged post with an empty body.
    pub fn new(id: &str, title: &str, description: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: EntryId::new(id)?,
            title: RequiredText::new(title)?,
            description: RequiredText::new(description)?,
            body: String::new(),
            tags: Vec::new(),
            draft: false,
            featured: false,
            date: None,
            updated_date: None,
            hero_image: None,
        })
    }
}

/// A project with all schema defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEntry {
    pub id: EntryId,
    pub title: RequiredText,
    pub description: RequiredText,
    /// Raw markdown body, frontmatter excluded
    pub body: String,
    pub tags: Vec<String>,
    pub featured: bool,
    pub status: ProjectStatus,
    pub year: Option<i32>,
    pub link: Option<ProjectUrl>,
    pub repo: Option<ProjectUrl>,
    pub hero_image: Option<String>,
}

impl ProjectEntry {
    /// Create a completed, non-featured, untagged project with an empty body.
    pub fn new(id: &str, title: &str, description: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            id: EntryId::new(id)?,
            title: RequiredText::new(title)?,
            description: RequiredText::new(description)?,
            body: String::new(),
            tags: Vec::new(),
            featured: false,
            status: ProjectStatus::default(),
            year: None,
            link: None,
            repo: None,
            hero_image: None,
        })
    }
}

/// An entry of either collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentEntry {
    Blog(BlogEntry),
    Project(ProjectEntry),
}

impl ContentEntry {
    pub fn id(&self) -> &EntryId {
        match self {
            Self::Blog(entry) => &entry.id,
            Self::Project(entry) => &entry.id,
        }
    }

    pub fn kind(&self) -> ContentKind {
        match self {
            Self::Blog(_) => ContentKind::Blog,
            Self::Project(_) => ContentKind::Project,
        }
    }

    pub fn into_blog(self) -> Option<BlogEntry> {
        match self {
            Self::Blog(entry) => Some(entry),
            Self::Project(_) => None,
        }
    }

    pub fn into_project(self) -> Option<ProjectEntry> {
        match self {
            Self::Project(entry) => Some(entry),
            Self::Blog(_) => None,
        }
    }
}

impl From<BlogEntry> for ContentEntry {
    fn from(entry: BlogEntry) -> Self {
        Self::Blog(entry)
    }
}

impl From<ProjectEntry> for ContentEntry {
    fn from(entry: ProjectEntry) -> Self {
        Self::Project(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ContentKind::Blog.collection_name(), "blog");
        assert_eq!(ContentKind::Project.collection_name(), "projects");
        assert_eq!(ContentKind::Project.to_string(), "project");
        assert_eq!(ContentKind::ALL, [ContentKind::Blog, ContentKind::Project]);
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("completed".parse::<ProjectStatus>(), Ok(ProjectStatus::Completed));
        assert_eq!("in-progress".parse::<ProjectStatus>(), Ok(ProjectStatus::InProgress));
        assert_eq!("archived".parse::<ProjectStatus>(), Ok(ProjectStatus::Archived));
        assert_eq!(
            "abandoned".parse::<ProjectStatus>(),
            Err(ValidationError::UnknownStatus("abandoned".to_string()))
        );
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&ProjectStatus::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
        assert_eq!(ProjectStatus::default(), ProjectStatus::Completed);
    }

    #[test]
    fn test_entry_constructors_apply_defaults() {
        let post = BlogEntry::new("a.md", "A", "d").unwrap();
        assert!(!post.draft);
        assert!(!post.featured);
        assert!(post.tags.is_empty());
        assert!(post.date.is_none());

        let project = ProjectEntry::new("p1", "P", "d").unwrap();
        assert_eq!(project.status, ProjectStatus::Completed);
        assert!(project.year.is_none());
    }

    #[test]
    fn test_entry_constructors_validate() {
        assert!(BlogEntry::new("", "A", "d").is_err());
        assert!(BlogEntry::new("a.md", "", "d").is_err());
        assert!(ProjectEntry::new("p1", "P", "  ").is_err());
    }

    #[test]
    fn test_content_entry_accessors() {
        let entry: ContentEntry = ProjectEntry::new("p1", "P", "d").unwrap().into();
        assert_eq!(entry.kind(), ContentKind::Project);
        assert_eq!(entry.id().as_str(), "p1");
        assert!(entry.clone().into_blog().is_none());
        assert!(entry.into_project().is_some());
    }
}
