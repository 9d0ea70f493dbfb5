use mesh_agent_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RouteRegistry;

pub struct MarkHealthyUseCase {
    routes: Arc<dyn RouteRegistry>,
}

impl MarkHealthyUseCase {
    pub fn new(routes: Arc<dyn RouteRegistry>) -> Self {
        Self { routes }
    }

    /// Returns the number of routes that list the node.
    #[instrument(skip(self))]
    pub fn execute(&self, node_id: &str) -> Result<usize, DomainError> {
        let routes = self.routes.mark_healthy(node_id)?;
        info!(node = %node_id, routes, "Node recovered, available as failover candidate");
        Ok(routes)
    }
}
