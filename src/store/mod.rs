//! Content store access.
//!
//! The content store is the external collaborator that owns the raw content
//! files. This module defines the synchronous [`ContentStore`] boundary, the
//! filesystem implementation used by real builds, and an async wrapper that
//! keeps blocking reads off the runtime's worker threads.

pub mod async_wrapper;
pub mod file_store;
pub mod frontmatter;

pub use async_wrapper::{AsyncContentStore, AsyncContentStoreImpl};
pub use file_store::FileContentStore;
pub use frontmatter::split_frontmatter;

use crate::error::ContentResult;
use crate::models::ContentKind;

/// An unparsed entry as it comes out of the content store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    /// Source path relative to the collection directory, `/`-separated
    pub id: String,

    /// Frontmatter text (YAML), without the `---` fences
    pub frontmatter: String,

    /// Everything after the frontmatter block
    pub body: String,
}

impl RawEntry {
    pub fn new(
        id: impl Into<String>,
        frontmatter: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            frontmatter: frontmatter.into(),
            body: body.into(),
        }
    }
}

/// Read access to a content store.
///
/// Implementations must be deterministic: unchanged content yields the same
/// entries in the same order.
pub trait ContentStore: Send + Sync {
    /// Enumerate every entry of one collection.
    fn get_entries_of_kind(&self, kind: ContentKind) -> ContentResult<Vec<RawEntry>>;
}
