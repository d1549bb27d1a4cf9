//! Data models for the content collections.
//!
//! `frontmatter` holds the declarative per-collection schemas, `entry` the
//! validated, defaulted records the rest of the crate works with.

pub mod entry;
pub mod frontmatter;

pub use entry::{BlogEntry, ContentEntry, ContentKind, ProjectEntry, ProjectStatus};
pub use frontmatter::{BlogFrontmatter, DateValue, ProjectFrontmatter};
