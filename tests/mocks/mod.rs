pub mod mock_content_repository;
pub mod mock_content_store;

#[allow(unused_imports)]
pub use mock_content_repository::MockContentRepository;
#[allow(unused_imports)]
pub use mock_content_store::MockContentStore;
