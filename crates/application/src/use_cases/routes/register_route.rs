use mesh_agent_domain::{DomainError, EdgeNode, RouteSnapshot};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RouteRegistry;

pub struct RegisterRouteUseCase {
    routes: Arc<dyn RouteRegistry>,
}

impl RegisterRouteUseCase {
    pub fn new(routes: Arc<dyn RouteRegistry>) -> Self {
        Self { routes }
    }

    /// Registers `destination` with `nodes` in failover order, all healthy.
    #[instrument(skip(self))]
    pub fn execute(
        &self,
        destination: &str,
        nodes: &[String],
    ) -> Result<RouteSnapshot, DomainError> {
        RouteSnapshot::validate_destination(destination).map_err(DomainError::InvalidRoute)?;
        for node in nodes {
            EdgeNode::validate_id(node).map_err(DomainError::InvalidRoute)?;
        }

        let candidates = nodes.iter().map(|n| EdgeNode::new(n.as_str())).collect();
        let snapshot = self.routes.register(destination, candidates)?;

        info!(
            destination = %destination,
            candidates = snapshot.candidates.len(),
            primary = ?snapshot.primary().map(|n| n.id.as_ref()),
            "Route registered"
        );

        Ok(snapshot)
    }
}
