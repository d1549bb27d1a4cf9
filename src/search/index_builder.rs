//! Search index builder.
//!
//! Loads both content collections through a [`ContentRepository`], maps them
//! into [`SearchDocument`]s and assembles the combined [`SearchIndex`].
//!
//! Search is best-effort: [`SearchIndexBuilder::build_index`] never returns
//! an error. What happens on a load failure is governed by [`FailurePolicy`].

use crate::error::{ContentError, ContentResult};
use crate::models::{BlogEntry, ContentKind, ProjectEntry};
use crate::observability::{BuildMetrics, Timer};
use crate::repositories::ContentRepository;
use crate::search::document::{DocumentVariant, SearchDocument, SearchIndex};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info, warn};

/// What a build does when content fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Any failure degrades the whole index to empty.
    #[default]
    AllOrNothing,

    /// Index whatever loaded; a failing collection contributes nothing.
    Partial,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all-or-nothing" | "strict" => Ok(Self::AllOrNothing),
            "partial" => Ok(Self::Partial),
            other => Err(format!(
                "expected 'all-or-nothing' or 'partial', got: {}",
                other
            )),
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllOrNothing => f.write_str("all-or-nothing"),
            Self::Partial => f.write_str("partial"),
        }
    }
}

/// Format a timestamp the way the search widget expects it
/// (`YYYY-MM-DDTHH:MM:SS.mmmZ`).
pub fn canonical_timestamp(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Map published blog posts to search documents. Drafts are dropped.
pub fn build_blog_documents(entries: impl IntoIterator<Item = BlogEntry>) -> Vec<SearchDocument> {
    entries
        .into_iter()
        .filter(|post| !post.draft)
        .map(|post| SearchDocument {
            slug: post.id.slug(),
            variant: DocumentVariant::Blog {
                extension: post.id.extension().to_string(),
                date: post.date.as_ref().map(canonical_timestamp),
            },
            id: post.id.into_inner(),
            title: post.title.into_inner(),
            description: post.description.into_inner(),
            content: post.body,
            tags: post.tags,
            featured: post.featured,
        })
        .collect()
}

/// Map every project to a search document, whatever its status.
pub fn build_project_documents(
    entries: impl IntoIterator<Item = ProjectEntry>,
) -> Vec<SearchDocument> {
    entries
        .into_iter()
        .map(|project| SearchDocument {
            slug: project.id.slug(),
            variant: DocumentVariant::Project {
                year: project.year,
                status: project.status,
            },
            id: project.id.into_inner(),
            title: project.title.into_inner(),
            description: project.description.into_inner(),
            content: project.body,
            tags: project.tags,
            featured: project.featured,
        })
        .collect()
}

/// Builds the site's search index from a content repository.
pub struct SearchIndexBuilder {
    repository: Arc<dyn ContentRepository>,
    policy: FailurePolicy,
    metrics: BuildMetrics,
}

impl SearchIndexBuilder {
    /// Create a builder using the default all-or-nothing policy.
    pub fn new(repository: Arc<dyn ContentRepository>) -> Self {
        Self {
            repository,
            policy: FailurePolicy::default(),
            metrics: BuildMetrics::new(),
        }
    }

    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_metrics(mut self, metrics: BuildMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn metrics(&self) -> &BuildMetrics {
        &self.metrics
    }

    /// Build the combined index.
    ///
    /// Collections are loaded one after the other, blog first. This never
    /// fails: under [`FailurePolicy::AllOrNothing`] any error yields
    /// [`SearchIndex::empty`], under [`FailurePolicy::Partial`] only the
    /// failing collection is left out.
    pub async fn build_index(&self) -> SearchIndex {
        let timer = Timer::new("build_search_index");

        let (index, degraded) = match self.policy {
            FailurePolicy::AllOrNothing => match self.try_build_index().await {
                Ok(index) => (index, false),
                Err(e) => {
                    error!(error = %e, "Search index build failed, emitting empty index");
                    (SearchIndex::empty(), true)
                }
            },
            FailurePolicy::Partial => self.build_partial_index().await,
        };

        self.metrics.track_build(timer.finish(), index.len(), degraded);
        info!(
            blog = index.blog.len(),
            projects = index.projects.len(),
            policy = %self.policy,
            "Search index assembled"
        );
        index
    }

    /// Build the index, surfacing the first error instead of degrading.
    pub async fn try_build_index(&self) -> ContentResult<SearchIndex> {
        let blog = self.load_blog().await?;
        let projects = self.load_projects().await?;
        SearchIndex::assemble(blog, projects)
    }

    async fn build_partial_index(&self) -> (SearchIndex, bool) {
        let mut degraded = false;

        let blog = self.load_blog().await.unwrap_or_else(|e| {
            warn!(error = %e, "Blog collection left out of search index");
            degraded = true;
            Vec::new()
        });
        let projects = self.load_projects().await.unwrap_or_else(|e| {
            warn!(error = %e, "Project collection left out of search index");
            degraded = true;
            Vec::new()
        });

        (SearchIndex::assemble_lenient(blog, projects), degraded)
    }

    async fn load_blog(&self) -> ContentResult<Vec<SearchDocument>> {
        let entries = self
            .repository
            .blog_entries()
            .await
            .map_err(|e| self.record_failure(ContentKind::Blog, e))?;
        self.metrics.track_collection_loaded(ContentKind::Blog, entries.len());

        let total = entries.len();
        let documents = build_blog_documents(entries);
        self.metrics.track_drafts_skipped(total - documents.len());
        Ok(documents)
    }

    async fn load_projects(&self) -> ContentResult<Vec<SearchDocument>> {
        let entries = self
            .repository
            .project_entries()
            .await
            .map_err(|e| self.record_failure(ContentKind::Project, e))?;
        self.metrics.track_collection_loaded(ContentKind::Project, entries.len());

        Ok(build_project_documents(entries))
    }

    fn record_failure(&self, kind: ContentKind, error: ContentError) -> ContentError {
        self.metrics.track_load_failure(kind, &error);
        error
    }
}
