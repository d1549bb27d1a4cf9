//! Domain value objects and types.
//!
//! Type-safe wrappers for the validated parts of a content entry: its id,
//! its required text fields and project URLs. Each validates at construction
//! so an invalid entry can never reach the index builder.

pub mod entry_id;
pub mod errors;
pub mod project_url;
pub mod required_text;

pub use entry_id::EntryId;
pub use errors::ValidationError;
pub use project_url::ProjectUrl;
pub use required_text::RequiredText;
