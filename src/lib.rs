//! Portfolio search index - build-time search data for the portfolio/blog site.
//!
//! This library flattens the site's content collections (blog posts and
//! projects) into one normalized document set that the client-side fuzzy
//! search widget loads as a static asset.
//!
//! # Architecture
//!
//! - **store**: raw access to the content store (markdown files with YAML frontmatter)
//! - **models**: frontmatter schemas and the validated entries built from them
//! - **domain**: value objects validated at construction (ids, required text, URLs)
//! - **repositories**: the content source adapter, yielding validated, defaulted entries
//! - **search**: search documents and the index builder with its failure policy
//! - **output**: serialization of build artifacts
//! - **config**: configuration and site metadata from environment variables
//! - **error**: custom error types for precise error handling
//! - **observability**: build counters and timers

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod output;
pub mod repositories;
pub mod search;
pub mod store;

// Re-export commonly used types
pub use config::{Config, SiteMetadata};
pub use error::{ConfigError, ContentError, OutputError};
pub use models::{BlogEntry, ContentEntry, ContentKind, ProjectEntry, ProjectStatus};
pub use observability::BuildMetrics;
pub use output::IndexWriter;
pub use repositories::{ContentRepository, StoreContentRepository};
pub use search::{FailurePolicy, SearchDocument, SearchIndex, SearchIndexBuilder};
pub use store::{AsyncContentStore, AsyncContentStoreImpl, ContentStore, FileContentStore};
