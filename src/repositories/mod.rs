mod store_content_repository;
mod traits;

pub use store_content_repository::StoreContentRepository;
pub use traits::ContentRepository;
