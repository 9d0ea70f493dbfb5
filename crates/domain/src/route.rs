use crate::edge_node::EdgeNode;
use serde::Serialize;
use std::sync::Arc;

/// Point-in-time view of a route, safe to hand to the HTTP layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSnapshot {
    pub destination: Arc<str>,
    pub candidates: Vec<EdgeNode>,
    pub primary_index: Option<usize>,
}

impl RouteSnapshot {
    pub fn primary(&self) -> Option<&EdgeNode> {
        self.primary_index.and_then(|i| self.candidates.get(i))
    }

    pub fn is_degraded(&self) -> bool {
        self.primary().is_none()
    }

    pub fn healthy_count(&self) -> usize {
        self.candidates.iter().filter(|n| n.healthy).count()
    }

    pub fn validate_destination(destination: &str) -> Result<(), String> {
        if destination.is_empty() {
            return Err("Destination cannot be empty".to_string());
        }

        if destination.len() > 253 {
            return Err("Destination cannot exceed 253 characters".to_string());
        }

        if destination
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '/')
        {
            return Err(format!(
                "Destination '{}' contains whitespace or '/'",
                destination
            ));
        }

        Ok(())
    }
}

/// Result of reporting a node failure on a destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailoverOutcome {
    pub destination: Arc<str>,
    pub failed_node: Arc<str>,
    /// Whether the failed node was the active primary, i.e. a failover ran.
    pub failed_over: bool,
    pub primary: Option<EdgeNode>,
}

impl FailoverOutcome {
    pub fn is_degraded(&self) -> bool {
        self.primary.is_none()
    }
}
