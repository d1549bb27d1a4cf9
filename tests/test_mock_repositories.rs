mod mocks;

use mocks::{MockContentRepository, MockContentStore};
use portfolio_search_index::error::ContentError;
use portfolio_search_index::models::{BlogEntry, ContentEntry, ContentKind, ProjectEntry};
use portfolio_search_index::repositories::ContentRepository;
use portfolio_search_index::store::ContentStore;

fn sample_post(id: &str) -> BlogEntry {
    BlogEntry::new(id, "Title", "Description").unwrap()
}

#[tokio::test]
async fn test_mock_repository_blog_entries() {
    let repo = MockContentRepository::new();
    repo.add_blog_entry(sample_post("a.md"));
    repo.add_blog_entry(sample_post("b.md"));

    let result = repo.blog_entries().await.unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result[0].id.as_str(), "a.md");
    assert_eq!(repo.get_call_count("blog_entries"), 1);
}

#[tokio::test]
async fn test_mock_repository_load_entries_by_kind() {
    let repo = MockContentRepository::new();
    repo.add_blog_entry(sample_post("a.md"));
    repo.add_project_entry(ProjectEntry::new("p1", "P", "d").unwrap());

    let blog = repo.load_entries(ContentKind::Blog).await.unwrap();
    assert!(matches!(blog.as_slice(), [ContentEntry::Blog(_)]));

    let projects = repo.load_entries(ContentKind::Project).await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].kind(), ContentKind::Project);
    assert_eq!(projects[0].id().as_str(), "p1");

    assert_eq!(repo.get_call_count("blog_entries"), 1);
    assert_eq!(repo.get_call_count("project_entries"), 1);
}

#[tokio::test]
async fn test_mock_repository_injected_failure() {
    let repo = MockContentRepository::new();
    repo.add_blog_entry(sample_post("a.md"));
    repo.fail_with(
        ContentKind::Blog,
        ContentError::SourceUnavailable("offline".to_string()),
    );

    assert!(repo.blog_entries().await.is_err());
    assert!(repo.project_entries().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_mock_repository_reset_call_counts() {
    let repo = MockContentRepository::new();
    repo.blog_entries().await.unwrap();
    repo.blog_entries().await.unwrap();
    assert_eq!(repo.get_call_count("blog_entries"), 2);

    repo.reset_call_counts();
    assert_eq!(repo.get_call_count("blog_entries"), 0);
}

#[test]
fn test_mock_store_sorted_by_id() {
    let store = MockContentStore::new();
    store.add(ContentKind::Blog, "z.md", "title: Z\n", "");
    store.add(ContentKind::Blog, "a.md", "title: A\n", "");

    let entries = store.get_entries_of_kind(ContentKind::Blog).unwrap();
    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a.md", "z.md"]);

    assert!(store
        .get_entries_of_kind(ContentKind::Project)
        .unwrap()
        .is_empty());
}

#[test]
fn test_mock_store_unavailable() {
    let store = MockContentStore::new();
    store.set_unavailable(ContentKind::Project);

    let result = store.get_entries_of_kind(ContentKind::Project);
    assert!(matches!(result, Err(ContentError::SourceUnavailable(_))));
}
