use mesh_agent_domain::{DomainError, EdgeNode};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::RouteRegistry;

/// Operator-triggered primary election, the way back for degraded routes.
pub struct ReelectPrimaryUseCase {
    routes: Arc<dyn RouteRegistry>,
}

impl ReelectPrimaryUseCase {
    pub fn new(routes: Arc<dyn RouteRegistry>) -> Self {
        Self { routes }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, destination: &str) -> Result<Option<EdgeNode>, DomainError> {
        let primary = self.routes.reelect(destination)?;
        match &primary {
            Some(node) => info!(destination = %destination, primary = %node.id, "Primary re-elected"),
            None => warn!(destination = %destination, "Re-election found no healthy node"),
        }
        Ok(primary)
    }
}
