//! Application state for the web layer.

use std::sync::Arc;

use crate::schedule::ScheduleService;
use crate::upstream::UpstreamClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Schedule service backed by the upstream feed
    pub schedule: Arc<ScheduleService<UpstreamClient>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(upstream: UpstreamClient) -> Self {
        Self {
            schedule: Arc::new(ScheduleService::new(upstream)),
        }
    }
}
