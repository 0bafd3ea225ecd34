//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use uplift_core::config::UpliftConfig;
use uplift_session::Analyzer;

/// Shared application state, passed to handlers via axum's State extractor.
///
/// All fields use `Arc` for cheap cloning across handler tasks; the
/// analyzer serializes per-session access internally.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration (read-only after startup).
    pub config: Arc<UpliftConfig>,
    /// The classification-and-response pipeline plus session store.
    pub analyzer: Arc<Analyzer>,
    /// Server start time for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: UpliftConfig, analyzer: Analyzer) -> Self {
        Self {
            config: Arc::new(config),
            analyzer: Arc::new(analyzer),
            start_time: Instant::now(),
        }
    }
}
