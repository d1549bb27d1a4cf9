//! Observability for index builds.
//!
//! Counters describing what a build loaded, skipped and emitted, plus a
//! timer for logging operation durations.

pub mod metrics;

pub use metrics::{BuildMetrics, Timer};
