//! Async wrapper around a synchronous [`ContentStore`].
//!
//! Store reads are blocking filesystem operations; they run on tokio's
//! blocking pool via `tokio::task::spawn_blocking` so the runtime's worker
//! threads are never stalled.

use crate::error::{ContentError, ContentResult};
use crate::models::ContentKind;
use crate::store::{ContentStore, RawEntry};
use async_trait::async_trait;
use std::sync::Arc;

/// Async access to a content store.
#[async_trait]
pub trait AsyncContentStore: Send + Sync {
    async fn get_entries_of_kind(&self, kind: ContentKind) -> ContentResult<Vec<RawEntry>>;
}

/// Runs a synchronous store on the blocking thread pool.
#[derive(Clone)]
pub struct AsyncContentStoreImpl {
    store: Arc<dyn ContentStore>,
}

impl AsyncContentStoreImpl {
    pub fn new(store: impl ContentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

#[async_trait]
impl AsyncContentStore for AsyncContentStoreImpl {
    async fn get_entries_of_kind(&self, kind: ContentKind) -> ContentResult<Vec<RawEntry>> {
        let store = self.store.clone();

        tokio::task::spawn_blocking(move || store.get_entries_of_kind(kind))
            .await
            .map_err(|e| ContentError::SourceUnavailable(format!("Task join error: {}", e)))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStore;

    impl ContentStore for FixedStore {
        fn get_entries_of_kind(&self, kind: ContentKind) -> ContentResult<Vec<RawEntry>> {
            match kind {
                ContentKind::Blog => Ok(vec![RawEntry::new("a.md", "title: A\n", "body")]),
                ContentKind::Project => Err(ContentError::SourceUnavailable("offline".into())),
            }
        }
    }

    #[tokio::test]
    async fn test_async_wrapper_forwards_results() {
        let store = AsyncContentStoreImpl::new(FixedStore);

        let blog = store.get_entries_of_kind(ContentKind::Blog).await.unwrap();
        assert_eq!(blog.len(), 1);
        assert_eq!(blog[0].id, "a.md");

        let projects = store.get_entries_of_kind(ContentKind::Project).await;
        assert_eq!(
            projects,
            Err(ContentError::SourceUnavailable("offline".to_string()))
        );
    }
}
