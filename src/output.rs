//! Build output writer.
//!
//! Serializes the search index and the site metadata into the build output
//! directory, where the presentation layer picks them up as static assets.

use crate::config::SiteMetadata;
use crate::error::{OutputError, OutputResult};
use crate::search::SearchIndex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name of the serialized search index.
pub const SEARCH_INDEX_FILE: &str = "search-index.json";

/// File name of the serialized site metadata.
pub const SITE_METADATA_FILE: &str = "site.json";

/// Writes build artifacts into an output directory.
#[derive(Debug, Clone)]
pub struct IndexWriter {
    output_dir: PathBuf,
    pretty: bool,
}

impl IndexWriter {
    pub fn new(output_dir: impl Into<PathBuf>, pretty: bool) -> Self {
        Self {
            output_dir: output_dir.into(),
            pretty,
        }
    }

    /// Write `search-index.json`, returning its path.
    pub fn write_index(&self, index: &SearchIndex) -> OutputResult<PathBuf> {
        let path = self.write_json(SEARCH_INDEX_FILE, index)?;
        info!(
            path = %path.display(),
            documents = index.len(),
            "Wrote search index"
        );
        Ok(path)
    }

    /// Write `site.json`, returning its path.
    pub fn write_site_metadata(&self, site: &SiteMetadata) -> OutputResult<PathBuf> {
        let path = self.write_json(SITE_METADATA_FILE, site)?;
        info!(path = %path.display(), version = %site.version, "Wrote site metadata");
        Ok(path)
    }

    /// Serialize a value the way this writer is configured to.
    pub fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> OutputResult<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    fn write_json<T: Serialize + ?Sized>(
        &self,
        file_name: &str,
        value: &T,
    ) -> OutputResult<PathBuf> {
        let json = self.to_json(value)?;

        std::fs::create_dir_all(&self.output_dir).map_err(|e| io_error(&self.output_dir, e))?;

        let path = self.output_dir.join(file_name);
        std::fs::write(&path, json).map_err(|e| io_error(&path, e))?;
        Ok(path)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> OutputError {
    OutputError::Io {
        path: path.display().to_string(),
        source,
    }
}
