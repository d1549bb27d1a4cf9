use portfolio_search_index::error::{ContentError, ContentResult};
use portfolio_search_index::models::ContentKind;
use portfolio_search_index::store::{ContentStore, RawEntry};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock content store holding raw, unvalidated entries.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContentStore {
    entries: Arc<Mutex<HashMap<ContentKind, Vec<RawEntry>>>>,
    unavailable: Arc<Mutex<Option<ContentKind>>>,
}

#[allow(dead_code)]
impl MockContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a raw entry to a collection.
    pub fn add(&self, kind: ContentKind, id: &str, frontmatter: &str, body: &str) {
        self.entries
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push(RawEntry::new(id, frontmatter, body));
    }

    /// Simulate the store failing to enumerate one collection.
    pub fn set_unavailable(&self, kind: ContentKind) {
        *self.unavailable.lock().unwrap() = Some(kind);
    }
}

impl ContentStore for MockContentStore {
    fn get_entries_of_kind(&self, kind: ContentKind) -> ContentResult<Vec<RawEntry>> {
        if *self.unavailable.lock().unwrap() == Some(kind) {
            return Err(ContentError::SourceUnavailable(format!(
                "mock store cannot enumerate {}",
                kind.collection_name()
            )));
        }

        let mut entries = self
            .entries
            .lock()
            .unwrap()
            .get(&kind)
            .cloned()
            .unwrap_or_default();
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(entries)
    }
}
