use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::{RouteRegistry, RouteResolution};

pub struct ResolveRouteUseCase {
    routes: Arc<dyn RouteRegistry>,
}

impl ResolveRouteUseCase {
    pub fn new(routes: Arc<dyn RouteRegistry>) -> Self {
        Self { routes }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, destination: &str) -> RouteResolution {
        let resolution = self.routes.resolve(destination);
        match &resolution {
            RouteResolution::Resolved(node) => debug!(node = %node.id, "Route resolved"),
            RouteResolution::Degraded => debug!("Route is degraded"),
            RouteResolution::Unknown => debug!("Route is unknown"),
        }
        resolution
    }
}
