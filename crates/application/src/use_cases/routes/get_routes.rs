use mesh_agent_domain::RouteSnapshot;
use std::sync::Arc;

use crate::ports::RouteRegistry;

pub struct GetRoutesUseCase {
    routes: Arc<dyn RouteRegistry>,
}

impl GetRoutesUseCase {
    pub fn new(routes: Arc<dyn RouteRegistry>) -> Self {
        Self { routes }
    }

    /// All routes, sorted by destination.
    pub fn get_all(&self) -> Vec<RouteSnapshot> {
        let mut routes = self.routes.snapshots();
        routes.sort_by(|a, b| a.destination.cmp(&b.destination));
        routes
    }

    pub fn get(&self, destination: &str) -> Option<RouteSnapshot> {
        self.routes.snapshot(destination)
    }
}
