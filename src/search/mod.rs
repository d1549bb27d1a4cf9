//! Search index construction.
//!
//! Flattens the blog and project collections into one uniform set of
//! [`SearchDocument`]s for the client-side fuzzy search widget.

pub mod document;
pub mod index_builder;

pub use document::{DocumentVariant, SearchDocument, SearchIndex};
pub use index_builder::{
    build_blog_documents, build_project_documents, canonical_timestamp, FailurePolicy,
    SearchIndexBuilder,
};
