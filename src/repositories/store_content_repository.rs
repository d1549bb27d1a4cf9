use crate::domain::EntryId;
use crate::error::{ContentError, ContentResult};
use crate::models::{BlogEntry, BlogFrontmatter, ContentKind, ProjectEntry, ProjectFrontmatter};
use crate::repositories::traits::ContentRepository;
use crate::store::{AsyncContentStore, RawEntry};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Content repository backed by a content store.
///
/// Parses each raw entry's frontmatter against its collection schema and
/// applies the schema defaults. Any invalid entry fails the whole collection
/// with a [`ContentError::Validation`] naming the entry and field.
pub struct StoreContentRepository {
    store: Arc<dyn AsyncContentStore>,
}

impl StoreContentRepository {
    /// Create a new StoreContentRepository over the given store.
    pub fn new(store: Arc<dyn AsyncContentStore>) -> Self {
        Self { store }
    }

    async fn load<F, T>(
        &self,
        kind: ContentKind,
        convert: impl Fn(F, EntryId, String) -> ContentResult<T>,
    ) -> ContentResult<Vec<T>>
    where
        F: DeserializeOwned + Default,
    {
        let raw_entries = self.store.get_entries_of_kind(kind).await?;
        let mut seen = HashSet::with_capacity(raw_entries.len());
        let mut entries = Vec::with_capacity(raw_entries.len());

        for raw in raw_entries {
            if !seen.insert(raw.id.clone()) {
                return Err(ContentError::validation(&raw.id, "id", "duplicate entry id"));
            }

            let (id, frontmatter, body) = parse_raw::<F>(raw)?;
            debug!(collection = kind.collection_name(), id = %id, "Validated content entry");
            entries.push(convert(frontmatter, id, body)?);
        }

        info!(
            collection = kind.collection_name(),
            count = entries.len(),
            "Loaded content collection"
        );
        Ok(entries)
    }
}

#[async_trait]
impl ContentRepository for StoreContentRepository {
    async fn blog_entries(&self) -> ContentResult<Vec<BlogEntry>> {
        self.load(ContentKind::Blog, |fm: BlogFrontmatter, id, body| {
            fm.into_entry(id, body)
        })
        .await
    }

    async fn project_entries(&self) -> ContentResult<Vec<ProjectEntry>> {
        self.load(ContentKind::Project, |fm: ProjectFrontmatter, id, body| {
            fm.into_entry(id, body)
        })
        .await
    }
}

/// Validate the id and deserialize the frontmatter of one raw entry.
fn parse_raw<F>(raw: RawEntry) -> ContentResult<(EntryId, F, String)>
where
    F: DeserializeOwned + Default,
{
    let id = EntryId::new(raw.id.as_str())
        .map_err(|e| ContentError::validation(&raw.id, "id", e.to_string()))?;

    let frontmatter = if raw.frontmatter.trim().is_empty() {
        F::default()
    } else {
        serde_yaml::from_str::<F>(&raw.frontmatter)
            .map_err(|e| ContentError::validation(id.as_str(), "frontmatter", e.to_string()))?
    };

    Ok((id, frontmatter, raw.body))
}
