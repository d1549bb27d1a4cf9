use crate::error::ContentResult;
use crate::models::{BlogEntry, ContentEntry, ContentKind, ProjectEntry};
use async_trait::async_trait;

/// Repository over the site's content collections.
///
/// Implementations return entries that are fully validated and defaulted;
/// consumers never re-check or re-default fields.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Load every blog post, drafts included.
    async fn blog_entries(&self) -> ContentResult<Vec<BlogEntry>>;

    /// Load every project.
    async fn project_entries(&self) -> ContentResult<Vec<ProjectEntry>>;

    /// Load every entry of one collection.
    async fn load_entries(&self, kind: ContentKind) -> ContentResult<Vec<ContentEntry>> {
        match kind {
            ContentKind::Blog => Ok(self
                .blog_entries()
                .await?
                .into_iter()
                .map(ContentEntry::from)
                .collect()),
            ContentKind::Project => Ok(self
                .project_entries()
                .await?
                .into_iter()
                .map(ContentEntry::from)
                .collect()),
        }
    }
}
