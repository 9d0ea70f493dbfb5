use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::RouteRegistry;

pub struct RemoveRouteUseCase {
    routes: Arc<dyn RouteRegistry>,
}

impl RemoveRouteUseCase {
    pub fn new(routes: Arc<dyn RouteRegistry>) -> Self {
        Self { routes }
    }

    #[instrument(skip(self))]
    pub fn execute(&self, destination: &str) -> bool {
        let removed = self.routes.remove(destination);
        if removed {
            info!(destination = %destination, "Route removed");
        }
        removed
    }
}
