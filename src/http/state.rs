//! Application state for the HTTP server.

use std::sync::Arc;
use std::time::Instant;

use crate::db::repository::MenuRepository;
use crate::obs::metrics::CafeMetrics;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for menu operations
    pub repository: Arc<dyn MenuRepository>,
    /// Metrics registry rendered by the `/metrics` handler
    pub metrics: Arc<CafeMetrics>,
    /// Server start time, used for the uptime metric
    pub started_at: Instant,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn MenuRepository>) -> Self {
        Self {
            repository,
            metrics: Arc::new(CafeMetrics::default()),
            started_at: Instant::now(),
        }
    }

    /// Seconds elapsed since the server started.
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
