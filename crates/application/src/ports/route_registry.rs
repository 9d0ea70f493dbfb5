use mesh_agent_domain::{DomainError, EdgeNode, FailoverOutcome, RouteSnapshot, RoutingStats};

/// Outcome of resolving a destination to its active edge node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteResolution {
    Resolved(EdgeNode),
    /// The destination exists but has no active primary.
    Degraded,
    Unknown,
}

/// Destination -> candidate edge nodes, with health tracking and failover.
///
/// Writers to one destination are serialized; unrelated destinations never
/// wait on each other.
pub trait RouteRegistry: Send + Sync {
    /// Creates or replaces the route. Fails with `InvalidRoute` when
    /// `candidates` is empty or repeats a node id.
    fn register(
        &self,
        destination: &str,
        candidates: Vec<EdgeNode>,
    ) -> Result<RouteSnapshot, DomainError>;

    /// Current primary, or why there is none. Reads the route once, so a
    /// concurrent register is seen either fully or not at all.
    fn resolve(&self, destination: &str) -> RouteResolution;

    fn mark_failure(
        &self,
        destination: &str,
        node_id: &str,
    ) -> Result<FailoverOutcome, DomainError>;

    /// Clears the unhealthy flag of `node_id` in every route listing it and
    /// returns how many routes were touched. Never changes a primary.
    fn mark_healthy(&self, node_id: &str) -> Result<usize, DomainError>;

    /// Re-runs primary election: first healthy candidate in order.
    fn reelect(&self, destination: &str) -> Result<Option<EdgeNode>, DomainError>;

    fn remove(&self, destination: &str) -> bool;

    fn snapshot(&self, destination: &str) -> Option<RouteSnapshot>;

    fn snapshots(&self) -> Vec<RouteSnapshot>;

    fn stats(&self) -> RoutingStats;
}
