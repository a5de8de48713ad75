//! Shared application state for the vitals server.

use std::sync::Arc;

use vitals_core::service::MetricService;
use vitals_core::storage::MemoryMetricStorage;

/// Cloneable handle to the metric service shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    service: Arc<MetricService>,
}

impl AppState {
    /// One in-memory store per kind, wrapped by the routing service.
    /// Constructed once at startup and passed into the router; no
    /// process-wide singleton.
    pub fn new() -> Self {
        let service = MetricService::new(
            Arc::new(MemoryMetricStorage::new()),
            Arc::new(MemoryMetricStorage::new()),
        );
        Self {
            service: Arc::new(service),
        }
    }

    pub fn service(&self) -> &MetricService {
        &self.service
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
