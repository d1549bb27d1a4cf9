//! Wire shapes consumed by the client-side search widget.
//!
//! Field names here are a contract with the front end and must not be
//! renamed: `id`, `title`, `description`, `content`, `tags`, `slug`,
//! `featured`, the `type` discriminator, and the per-type fields
//! (`extension`/`date` for blog posts, `year`/`status` for projects).

use crate::error::{ContentError, ContentResult};
use crate::models::{ContentKind, ProjectStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::warn;

/// A normalized, searchable record for one published entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchDocument {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Raw markdown body
    pub content: String,
    pub tags: Vec<String>,
    pub slug: String,
    pub featured: bool,
    #[serde(flatten)]
    pub variant: DocumentVariant,
}

/// Type-specific fields, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DocumentVariant {
    Blog {
        extension: String,
        /// Canonical UTC timestamp, e.g. `2024-01-15T00:00:00.000Z`
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date: Option<String>,
    },
    Project {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        year: Option<i32>,
        status: ProjectStatus,
    },
}

impl SearchDocument {
    /// Which collection this document came from.
    pub fn kind(&self) -> ContentKind {
        match self.variant {
            DocumentVariant::Blog { .. } => ContentKind::Blog,
            DocumentVariant::Project { .. } => ContentKind::Project,
        }
    }
}

/// The complete search payload: per-kind lists plus their concatenation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchIndex {
    pub blog: Vec<SearchDocument>,
    pub projects: Vec<SearchDocument>,
    pub all: Vec<SearchDocument>,
}

impl SearchIndex {
    /// The degraded result: no documents at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Assemble an index, blog documents first.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::DuplicateId` if any id occurs twice.
    pub fn assemble(
        blog: Vec<SearchDocument>,
        projects: Vec<SearchDocument>,
    ) -> ContentResult<Self> {
        let mut seen = HashSet::new();
        for doc in blog.iter().chain(projects.iter()) {
            if !seen.insert(doc.id.as_str()) {
                return Err(ContentError::DuplicateId(doc.id.clone()));
            }
        }

        Ok(Self::concat(blog, projects))
    }

    /// Assemble an index, dropping any document whose id was already taken
    /// by an earlier one.
    pub fn assemble_lenient(blog: Vec<SearchDocument>, projects: Vec<SearchDocument>) -> Self {
        let mut seen = HashSet::new();
        let mut keep = |doc: &SearchDocument| {
            let fresh = seen.insert(doc.id.clone());
            if !fresh {
                warn!(id = %doc.id, kind = %doc.kind(), "Dropping document with duplicate id");
            }
            fresh
        };

        let blog: Vec<_> = blog.into_iter().filter(|doc| keep(doc)).collect();
        let projects: Vec<_> = projects.into_iter().filter(|doc| keep(doc)).collect();
        Self::concat(blog, projects)
    }

    fn concat(blog: Vec<SearchDocument>, projects: Vec<SearchDocument>) -> Self {
        let all = blog.iter().chain(projects.iter()).cloned().collect();
        Self {
            blog,
            projects,
            all,
        }
    }

    /// Number of documents in `all`.
    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }
}
