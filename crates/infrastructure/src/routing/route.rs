use chrono::{DateTime, Utc};
use mesh_agent_domain::{DomainError, EdgeNode, RouteSnapshot};
use smallvec::SmallVec;
use std::collections::HashSet;
use std::sync::Arc;

/// Mutable state of one destination. Always accessed under the route's lock.
#[derive(Debug)]
pub(crate) struct RouteState {
    destination: Arc<str>,
    candidates: SmallVec<[EdgeNode; 4]>,
    primary: Option<usize>,
}

impl RouteState {
    pub(crate) fn new(destination: &str, candidates: Vec<EdgeNode>) -> Result<Self, DomainError> {
        if candidates.is_empty() {
            return Err(DomainError::InvalidRoute(format!(
                "Route '{}' must have at least one candidate",
                destination
            )));
        }

        let mut seen = HashSet::with_capacity(candidates.len());
        for node in &candidates {
            if !seen.insert(node.id.as_ref()) {
                return Err(DomainError::InvalidRoute(format!(
                    "Route '{}' lists node '{}' more than once",
                    destination, node.id
                )));
            }
        }

        let mut state = Self {
            destination: Arc::from(destination),
            candidates: SmallVec::from_vec(candidates),
            primary: None,
        };
        state.elect();
        Ok(state)
    }

    pub(crate) fn primary(&self) -> Option<&EdgeNode> {
        self.primary.and_then(|i| self.candidates.get(i))
    }

    pub(crate) fn is_degraded(&self) -> bool {
        self.primary.is_none()
    }

    fn position(&self, node_id: &str) -> Option<usize> {
        self.candidates.iter().position(|n| n.id.as_ref() == node_id)
    }

    /// Primary becomes the first healthy candidate in order, or none.
    pub(crate) fn elect(&mut self) -> Option<&EdgeNode> {
        self.primary = self.candidates.iter().position(|n| n.healthy);
        self.primary()
    }

    /// First healthy candidate scanning after `failed`, wrapping once.
    /// Returns `None` when the scan comes back to `failed`.
    fn next_healthy_after(&self, failed: usize) -> Option<usize> {
        let len = self.candidates.len();
        (1..len)
            .map(|step| (failed + step) % len)
            .find(|&i| self.candidates[i].healthy)
    }

    /// Marks `node_id` unhealthy and fails over if it was the primary.
    /// Returns whether a failover ran.
    pub(crate) fn mark_failure(
        &mut self,
        node_id: &str,
        at: DateTime<Utc>,
    ) -> Result<bool, DomainError> {
        let idx = self.position(node_id).ok_or_else(|| {
            DomainError::UnknownNode(format!(
                "'{}' is not a candidate of route '{}'",
                node_id, self.destination
            ))
        })?;

        self.candidates[idx].mark_failed(at);

        if self.primary != Some(idx) {
            return Ok(false);
        }

        self.primary = self.next_healthy_after(idx);
        Ok(true)
    }

    /// Clears the unhealthy flag without touching the primary.
    /// Returns whether this route lists the node.
    pub(crate) fn mark_healthy(&mut self, node_id: &str) -> bool {
        match self.position(node_id) {
            Some(idx) => {
                self.candidates[idx].mark_healthy();
                true
            }
            None => false,
        }
    }

    pub(crate) fn snapshot(&self) -> RouteSnapshot {
        RouteSnapshot {
            destination: Arc::clone(&self.destination),
            candidates: self.candidates.to_vec(),
            primary_index: self.primary,
        }
    }
}
