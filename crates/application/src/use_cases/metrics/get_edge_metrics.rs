use mesh_agent_domain::EdgeMetrics;
use std::sync::Arc;

use crate::ports::{RouteRegistry, SessionStore};

/// Collects the counters exposed by the cache and the route table.
///
/// Each side is read independently, so the two halves of the report may be
/// a few operations apart under load.
pub struct GetEdgeMetricsUseCase {
    store: Arc<dyn SessionStore>,
    routes: Arc<dyn RouteRegistry>,
}

impl GetEdgeMetricsUseCase {
    pub fn new(store: Arc<dyn SessionStore>, routes: Arc<dyn RouteRegistry>) -> Self {
        Self { store, routes }
    }

    pub fn execute(&self) -> EdgeMetrics {
        EdgeMetrics {
            cache: self.store.stats(),
            routing: self.routes.stats(),
        }
    }
}
