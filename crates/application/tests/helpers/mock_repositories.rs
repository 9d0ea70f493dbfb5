#![allow(dead_code)]

use bytes::Bytes;
use chrono::Utc;
use mesh_agent_application::ports::{RouteRegistry, RouteResolution, SessionStore};
use mesh_agent_domain::{
    CacheStats, DomainError, EdgeNode, FailoverOutcome, RouteSnapshot, RoutingStats,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

// ============================================================================
// Mock SessionStore
// ============================================================================

/// Unbounded map; eviction is covered by the infrastructure tests.
#[derive(Default)]
pub struct MockSessionStore {
    entries: RwLock<HashMap<String, Bytes>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MockSessionStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl SessionStore for MockSessionStore {
    fn get(&self, key: &str) -> Option<Bytes> {
        let value = self.entries.read().unwrap().get(key).cloned();
        if value.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
        }
        value
    }

    fn put(&self, key: &str, value: Bytes) {
        self.entries.write().unwrap().insert(key.to_string(), value);
    }

    fn delete(&self, key: &str) -> bool {
        self.entries.write().unwrap().remove(key).is_some()
    }

    fn len(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            capacity: usize::MAX,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            ..Default::default()
        }
    }
}

// ============================================================================
// Mock RouteRegistry
// ============================================================================

/// Single-lock registry with the same failover rules as the real table.
#[derive(Default)]
pub struct MockRouteRegistry {
    routes: RwLock<HashMap<String, RouteSnapshot>>,
    failovers: AtomicU64,
}

impl MockRouteRegistry {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

impl RouteRegistry for MockRouteRegistry {
    fn register(
        &self,
        destination: &str,
        candidates: Vec<EdgeNode>,
    ) -> Result<RouteSnapshot, DomainError> {
        if candidates.is_empty() {
            return Err(DomainError::InvalidRoute(format!(
                "Route '{}' has no candidates",
                destination
            )));
        }
        let primary_index = candidates.iter().position(|n| n.healthy);
        let snapshot = RouteSnapshot {
            destination: Arc::from(destination),
            candidates,
            primary_index,
        };
        self.routes
            .write()
            .unwrap()
            .insert(destination.to_string(), snapshot.clone());
        Ok(snapshot)
    }

    fn resolve(&self, destination: &str) -> RouteResolution {
        match self.routes.read().unwrap().get(destination) {
            Some(route) => route
                .primary()
                .cloned()
                .map_or(RouteResolution::Degraded, RouteResolution::Resolved),
            None => RouteResolution::Unknown,
        }
    }

    fn mark_failure(
        &self,
        destination: &str,
        node_id: &str,
    ) -> Result<FailoverOutcome, DomainError> {
        let mut routes = self.routes.write().unwrap();
        let route = routes
            .get_mut(destination)
            .ok_or_else(|| DomainError::UnknownRoute(destination.to_string()))?;
        let idx = route
            .candidates
            .iter()
            .position(|n| n.id.as_ref() == node_id)
            .ok_or_else(|| DomainError::UnknownNode(node_id.to_string()))?;

        route.candidates[idx].mark_failed(Utc::now());
        let failed_over = route.primary_index == Some(idx);
        if failed_over {
            let len = route.candidates.len();
            route.primary_index = (1..len)
                .map(|step| (idx + step) % len)
                .find(|&i| route.candidates[i].healthy);
            self.failovers.fetch_add(1, Ordering::Relaxed);
        }

        Ok(FailoverOutcome {
            destination: Arc::clone(&route.destination),
            failed_node: Arc::from(node_id),
            failed_over,
            primary: route.primary().cloned(),
        })
    }

    fn mark_healthy(&self, node_id: &str) -> Result<usize, DomainError> {
        let mut touched = 0;
        for route in self.routes.write().unwrap().values_mut() {
            for node in route.candidates.iter_mut().filter(|n| n.id.as_ref() == node_id) {
                node.mark_healthy();
                touched += 1;
            }
        }
        if touched == 0 {
            return Err(DomainError::UnknownNode(node_id.to_string()));
        }
        Ok(touched)
    }

    fn reelect(&self, destination: &str) -> Result<Option<EdgeNode>, DomainError> {
        let mut routes = self.routes.write().unwrap();
        let route = routes
            .get_mut(destination)
            .ok_or_else(|| DomainError::UnknownRoute(destination.to_string()))?;
        route.primary_index = route.candidates.iter().position(|n| n.healthy);
        Ok(route.primary().cloned())
    }

    fn remove(&self, destination: &str) -> bool {
        self.routes.write().unwrap().remove(destination).is_some()
    }

    fn snapshot(&self, destination: &str) -> Option<RouteSnapshot> {
        self.routes.read().unwrap().get(destination).cloned()
    }

    fn snapshots(&self) -> Vec<RouteSnapshot> {
        self.routes.read().unwrap().values().cloned().collect()
    }

    fn stats(&self) -> RoutingStats {
        let routes = self.routes.read().unwrap();
        RoutingStats {
            total_routes: routes.len(),
            degraded_routes: routes.values().filter(|r| r.is_degraded()).count(),
            failovers: self.failovers.load(Ordering::Relaxed),
        }
    }
}
