use mesh_agent_domain::{DomainError, FailoverOutcome};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::ports::RouteRegistry;

/// Reports a failed edge node for a destination, rerouting if it was the primary.
pub struct TriggerFailoverUseCase {
    routes: Arc<dyn RouteRegistry>,
}

impl TriggerFailoverUseCase {
    pub fn new(routes: Arc<dyn RouteRegistry>) -> Self {
        Self { routes }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, destination: &str, node_id: &str) -> Result<FailoverOutcome, DomainError> {
        let outcome = self.routes.mark_failure(destination, node_id)?;

        match (&outcome.primary, outcome.failed_over) {
            (Some(primary), true) => warn!(
                destination = %destination,
                failed = %node_id,
                primary = %primary.id,
                "Primary failed, rerouted to next healthy node"
            ),
            (None, true) => error!(
                destination = %destination,
                failed = %node_id,
                "Primary failed and no healthy node remains, route degraded"
            ),
            (_, false) => info!(
                destination = %destination,
                failed = %node_id,
                "Standby node marked unhealthy"
            ),
        }

        Ok(outcome)
    }
}
