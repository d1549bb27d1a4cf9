//! Build metrics tracking.
//!
//! Counters are atomics behind `Arc`s so a tracker can be cloned into the
//! builder and still be read by whoever created it.

use crate::models::ContentKind;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Counters for search index builds.
#[derive(Debug, Clone)]
pub struct BuildMetrics {
    entries_loaded_total: Arc<AtomicU64>,
    drafts_skipped_total: Arc<AtomicU64>,
    documents_emitted_total: Arc<AtomicU64>,
    load_failures_total: Arc<AtomicU64>,
    degraded_builds_total: Arc<AtomicU64>,
}

impl BuildMetrics {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self {
            entries_loaded_total: Arc::new(AtomicU64::new(0)),
            drafts_skipped_total: Arc::new(AtomicU64::new(0)),
            documents_emitted_total: Arc::new(AtomicU64::new(0)),
            load_failures_total: Arc::new(AtomicU64::new(0)),
            degraded_builds_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Track a successfully loaded collection.
    pub fn track_collection_loaded(&self, kind: ContentKind, count: usize) {
        self.entries_loaded_total.fetch_add(count as u64, Ordering::Relaxed);

        tracing::debug!(kind = %kind, count = count, "Collection loaded");
    }

    /// Track draft posts left out of the index.
    pub fn track_drafts_skipped(&self, count: usize) {
        self.drafts_skipped_total.fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Track a collection that failed to load.
    pub fn track_load_failure(&self, kind: ContentKind, error: &dyn std::error::Error) {
        self.load_failures_total.fetch_add(1, Ordering::Relaxed);

        tracing::warn!(kind = %kind, error = %error, "Collection failed to load");
    }

    /// Track a finished build.
    pub fn track_build(&self, duration_ms: u128, document_count: usize, degraded: bool) {
        self.documents_emitted_total.fetch_add(document_count as u64, Ordering::Relaxed);
        if degraded {
            self.degraded_builds_total.fetch_add(1, Ordering::Relaxed);
        }

        tracing::info!(
            duration_ms = duration_ms,
            document_count = document_count,
            degraded = degraded,
            "Search index build completed"
        );
    }

    pub fn entries_loaded_total(&self) -> u64 {
        self.entries_loaded_total.load(Ordering::Relaxed)
    }

    pub fn drafts_skipped_total(&self) -> u64 {
        self.drafts_skipped_total.load(Ordering::Relaxed)
    }

    pub fn documents_emitted_total(&self) -> u64 {
        self.documents_emitted_total.load(Ordering::Relaxed)
    }

    pub fn load_failures_total(&self) -> u64 {
        self.load_failures_total.load(Ordering::Relaxed)
    }

    pub fn degraded_builds_total(&self) -> u64 {
        self.degraded_builds_total.load(Ordering::Relaxed)
    }

    /// Print a summary of all metrics.
    pub fn summary(&self) -> String {
        format!(
            "Build Summary:\n\
             Entries Loaded: {}\n\
             Drafts Skipped: {}\n\
             Documents Emitted: {}\n\
             Load Failures: {}\n\
             Degraded Builds: {}",
            self.entries_loaded_total(),
            self.drafts_skipped_total(),
            self.documents_emitted_total(),
            self.load_failures_total(),
            self.degraded_builds_total(),
        )
    }
}

impl Default for BuildMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// A timer for tracking operation duration.
pub struct Timer {
    start: Instant,
    operation: String,
}

impl Timer {
    /// Start a new timer for the given operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            start: Instant::now(),
            operation: operation.into(),
        }
    }

    /// Finish the timer and return the elapsed time in milliseconds.
    pub fn finish(self) -> u128 {
        let duration_ms = self.start.elapsed().as_millis();

        tracing::debug!(
            operation = %self.operation,
            duration_ms = duration_ms,
            "Operation completed"
        );

        duration_ms
    }
}
