use super::route::RouteState;
use chrono::Utc;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use mesh_agent_application::ports::{RouteRegistry, RouteResolution};
use mesh_agent_domain::{
    DomainError, EdgeNode, FailoverOutcome, RouteSnapshot, RoutingStats,
};
use rustc_hash::FxBuildHasher;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

type SharedRoute = Arc<RwLock<RouteState>>;

fn read_route(route: &SharedRoute) -> RwLockReadGuard<'_, RouteState> {
    route.read().unwrap_or_else(PoisonError::into_inner)
}

fn write_route(route: &SharedRoute) -> RwLockWriteGuard<'_, RouteState> {
    route.write().unwrap_or_else(PoisonError::into_inner)
}

/// Destination -> candidate edge nodes with fast failover.
///
/// Each destination owns its own lock. The map itself is only held long
/// enough to clone the route handle, so a failover on one destination never
/// stalls a lookup on another.
///
/// Lock order is always map shard, then route; no code path takes a shard
/// lock while holding a route lock.
pub struct RouteTable {
    routes: DashMap<Arc<str>, SharedRoute, FxBuildHasher>,
    failovers: AtomicU64,
}

impl RouteTable {
    pub fn new() -> Self {
        Self {
            routes: DashMap::with_hasher(FxBuildHasher),
            failovers: AtomicU64::new(0),
        }
    }

    fn route(&self, destination: &str) -> Option<SharedRoute> {
        self.routes.get(destination).map(|r| Arc::clone(r.value()))
    }

    fn all_routes(&self) -> Vec<SharedRoute> {
        self.routes.iter().map(|r| Arc::clone(r.value())).collect()
    }

    fn unknown_route(destination: &str) -> DomainError {
        DomainError::UnknownRoute(destination.to_string())
    }

    /// Creates or replaces a route. A replaced route is rewritten under its
    /// own lock so in-flight writers on the old state are ordered before it.
    pub fn register(
        &self,
        destination: &str,
        candidates: Vec<EdgeNode>,
    ) -> Result<RouteSnapshot, DomainError> {
        let state = RouteState::new(destination, candidates)?;
        let snapshot = state.snapshot();

        match self.routes.entry(Arc::from(destination)) {
            Entry::Occupied(entry) => {
                *write_route(entry.get()) = state;
                debug!(destination = %destination, "Route replaced");
            }
            Entry::Vacant(entry) => {
                entry.insert(Arc::new(RwLock::new(state)));
                debug!(destination = %destination, "Route created");
            }
        }

        Ok(snapshot)
    }

    /// Primary, degraded or unknown, decided from a single route handle.
    pub fn resolution(&self, destination: &str) -> RouteResolution {
        let Some(route) = self.route(destination) else {
            return RouteResolution::Unknown;
        };
        let primary = read_route(&route).primary().cloned();
        primary.map_or(RouteResolution::Degraded, RouteResolution::Resolved)
    }

    pub fn resolve(&self, destination: &str) -> Option<EdgeNode> {
        match self.resolution(destination) {
            RouteResolution::Resolved(node) => Some(node),
            RouteResolution::Degraded | RouteResolution::Unknown => None,
        }
    }

    pub fn contains(&self, destination: &str) -> bool {
        self.routes.contains_key(destination)
    }

    pub fn mark_failure(
        &self,
        destination: &str,
        node_id: &str,
    ) -> Result<FailoverOutcome, DomainError> {
        let route = self
            .route(destination)
            .ok_or_else(|| Self::unknown_route(destination))?;
        let mut state = write_route(&route);

        let failed_over = state.mark_failure(node_id, Utc::now())?;
        if failed_over {
            self.failovers.fetch_add(1, Ordering::Relaxed);
        }

        Ok(FailoverOutcome {
            destination: Arc::from(destination),
            failed_node: Arc::from(node_id),
            failed_over,
            primary: state.primary().cloned(),
        })
    }

    /// Clears the node's unhealthy flag in every route listing it, one route
    /// lock at a time.
    pub fn mark_healthy(&self, node_id: &str) -> Result<usize, DomainError> {
        let touched = self
            .all_routes()
            .iter()
            .filter(|route| write_route(route).mark_healthy(node_id))
            .count();

        if touched == 0 {
            return Err(DomainError::UnknownNode(format!(
                "'{}' is not a candidate of any route",
                node_id
            )));
        }

        Ok(touched)
    }

    pub fn reelect(&self, destination: &str) -> Result<Option<EdgeNode>, DomainError> {
        let route = self
            .route(destination)
            .ok_or_else(|| Self::unknown_route(destination))?;
        let mut state = write_route(&route);
        Ok(state.elect().cloned())
    }

    pub fn remove(&self, destination: &str) -> bool {
        self.routes.remove(destination).is_some()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn degraded_count(&self) -> usize {
        self.all_routes()
            .iter()
            .filter(|route| read_route(route).is_degraded())
            .count()
    }

    pub fn failovers(&self) -> u64 {
        self.failovers.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self, destination: &str) -> Option<RouteSnapshot> {
        let route = self.route(destination)?;
        let state = read_route(&route);
        Some(state.snapshot())
    }

    pub fn snapshots(&self) -> Vec<RouteSnapshot> {
        self.all_routes()
            .iter()
            .map(|route| read_route(route).snapshot())
            .collect()
    }

    pub fn stats(&self) -> RoutingStats {
        RoutingStats {
            total_routes: self.len(),
            degraded_routes: self.degraded_count(),
            failovers: self.failovers(),
        }
    }

    /// Registers routes whose nodes all start healthy, e.g. from static config.
    pub fn preload<'a, I>(&self, routes: I) -> Result<usize, DomainError>
    where
        I: IntoIterator<Item = (&'a str, &'a [String])>,
    {
        let mut count = 0;
        for (destination, nodes) in routes {
            let candidates = nodes.iter().map(|n| EdgeNode::new(n.as_str())).collect();
            self.register(destination, candidates)?;
            count += 1;
        }
        info!(routes = count, "Static routes loaded");
        Ok(count)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteRegistry for RouteTable {
    fn register(
        &self,
        destination: &str,
        candidates: Vec<EdgeNode>,
    ) -> Result<RouteSnapshot, DomainError> {
        RouteTable::register(self, destination, candidates)
    }

    fn resolve(&self, destination: &str) -> RouteResolution {
        RouteTable::resolution(self, destination)
    }

    fn mark_failure(
        &self,
        destination: &str,
        node_id: &str,
    ) -> Result<FailoverOutcome, DomainError> {
        RouteTable::mark_failure(self, destination, node_id)
    }

    fn mark_healthy(&self, node_id: &str) -> Result<usize, DomainError> {
        RouteTable::mark_healthy(self, node_id)
    }

    fn reelect(&self, destination: &str) -> Result<Option<EdgeNode>, DomainError> {
        RouteTable::reelect(self, destination)
    }

    fn remove(&self, destination: &str) -> bool {
        RouteTable::remove(self, destination)
    }

    fn snapshot(&self, destination: &str) -> Option<RouteSnapshot> {
        RouteTable::snapshot(self, destination)
    }

    fn snapshots(&self) -> Vec<RouteSnapshot> {
        RouteTable::snapshots(self)
    }

    fn stats(&self) -> RoutingStats {
        RouteTable::stats(self)
    }
}
