use async_trait::async_trait;
use portfolio_search_index::error::{ContentError, ContentResult};
use portfolio_search_index::models::{BlogEntry, ContentKind, ProjectEntry};
use portfolio_search_index::repositories::ContentRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock content repository for testing.
///
/// Holds already-validated entries and can be told to fail a collection.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContentRepository {
    blog: Arc<Mutex<Vec<BlogEntry>>>,
    projects: Arc<Mutex<Vec<ProjectEntry>>>,
    failures: Arc<Mutex<HashMap<ContentKind, ContentError>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContentRepository {
    pub fn new() -> Self {
        Self {
            blog: Arc::new(Mutex::new(Vec::new())),
            projects: Arc::new(Mutex::new(Vec::new())),
            failures: Arc::new(Mutex::new(HashMap::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn add_blog_entry(&self, entry: BlogEntry) {
        self.blog.lock().unwrap().push(entry);
    }

    pub fn add_project_entry(&self, entry: ProjectEntry) {
        self.projects.lock().unwrap().push(entry);
    }

    /// Make every load of `kind` fail with `error`.
    pub fn fail_with(&self, kind: ContentKind, error: ContentError) {
        self.failures.lock().unwrap().insert(kind, error);
    }

    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn injected_failure(&self, kind: ContentKind) -> ContentResult<()> {
        match self.failures.lock().unwrap().get(&kind) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

impl Default for MockContentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentRepository for MockContentRepository {
    async fn blog_entries(&self) -> ContentResult<Vec<BlogEntry>> {
        self.track_call("blog_entries");
        self.injected_failure(ContentKind::Blog)?;
        Ok(self.blog.lock().unwrap().clone())
    }

    async fn project_entries(&self) -> ContentResult<Vec<ProjectEntry>> {
        self.track_call("project_entries");
        self.injected_failure(ContentKind::Project)?;
        Ok(self.projects.lock().unwrap().clone())
    }
}
