//! Filesystem-backed content store.
//!
//! Layout: `<root>/blog/**/*.{md,mdx}` and `<root>/projects/**/*.{md,mdx}`.
//! Files and directories whose name starts with `_` or `.` are not entries.

use crate::error::{ContentError, ContentResult};
use crate::models::ContentKind;
use crate::store::{split_frontmatter, ContentStore, RawEntry};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// File extensions treated as content entries.
const ENTRY_EXTENSIONS: &[&str] = &["md", "mdx"];

/// Content store reading markdown collections from a directory tree.
#[derive(Debug, Clone)]
pub struct FileContentStore {
    root: PathBuf,
}

impl FileContentStore {
    /// Create a store rooted at the given content directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_entry(&self, collection_dir: &Path, path: &Path) -> ContentResult<RawEntry> {
        let id = entry_id_for(collection_dir, path);

        let source = std::fs::read_to_string(path).map_err(|e| {
            ContentError::SourceUnavailable(format!("cannot read {}: {}", path.display(), e))
        })?;

        let (frontmatter, body) = split_frontmatter(&source).ok_or_else(|| {
            ContentError::validation(&id, "frontmatter", "frontmatter block is never closed")
        })?;

        Ok(RawEntry::new(id, frontmatter, body))
    }
}

impl ContentStore for FileContentStore {
    fn get_entries_of_kind(&self, kind: ContentKind) -> ContentResult<Vec<RawEntry>> {
        if !self.root.is_dir() {
            return Err(ContentError::SourceUnavailable(format!(
                "content directory {} does not exist",
                self.root.display()
            )));
        }

        let collection_dir = self.root.join(kind.collection_name());
        if !collection_dir.exists() {
            warn!(
                collection = kind.collection_name(),
                path = %collection_dir.display(),
                "Collection directory missing, treating as empty"
            );
            return Ok(Vec::new());
        }
        if !collection_dir.is_dir() {
            return Err(ContentError::SourceUnavailable(format!(
                "{} is not a directory",
                collection_dir.display()
            )));
        }

        let mut entries = Vec::new();
        let walker = WalkDir::new(&collection_dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_excluded(e));

        for item in walker {
            let item = item.map_err(|e| {
                ContentError::SourceUnavailable(format!(
                    "cannot enumerate {}: {}",
                    collection_dir.display(),
                    e
                ))
            })?;

            if !item.file_type().is_file() || !has_entry_extension(item.path()) {
                continue;
            }

            let entry = self.read_entry(&collection_dir, item.path())?;
            debug!(collection = kind.collection_name(), id = %entry.id, "Read content entry");
            entries.push(entry);
        }

        entries.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(entries)
    }
}

fn is_excluded(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('_') || name.starts_with('.'))
        .unwrap_or(false)
}

fn has_entry_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ENTRY_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn entry_id_for(collection_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(collection_dir).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
