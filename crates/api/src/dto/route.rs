use mesh_agent_domain::{EdgeNode, FailoverOutcome, RouteSnapshot};
use serde::{Deserialize, Serialize};

/// Request DTO for registering a route
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRouteRequest {
    pub destination: String,
    /// Candidate node ids in failover order.
    pub nodes: Vec<String>,
}

/// Request DTO for reporting a failed node
#[derive(Debug, Clone, Deserialize)]
pub struct FailoverRequest {
    pub destination: String,
    pub node: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeNodeResponse {
    pub id: String,
    pub healthy: bool,
    pub last_failure: Option<String>,
}

impl From<&EdgeNode> for EdgeNodeResponse {
    fn from(node: &EdgeNode) -> Self {
        Self {
            id: node.id.to_string(),
            healthy: node.healthy,
            last_failure: node.last_failure.map(|at| at.to_rfc3339()),
        }
    }
}

/// Response DTO for a route and its candidates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteResponse {
    pub destination: String,
    pub candidates: Vec<EdgeNodeResponse>,
    pub primary: Option<String>,
    pub primary_index: Option<usize>,
    pub degraded: bool,
}

impl From<&RouteSnapshot> for RouteResponse {
    fn from(snapshot: &RouteSnapshot) -> Self {
        Self {
            destination: snapshot.destination.to_string(),
            candidates: snapshot.candidates.iter().map(EdgeNodeResponse::from).collect(),
            primary: snapshot.primary().map(|n| n.id.to_string()),
            primary_index: snapshot.primary_index,
            degraded: snapshot.is_degraded(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolveResponse {
    pub destination: String,
    pub node: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailoverResponse {
    pub destination: String,
    pub failed_node: String,
    pub failed_over: bool,
    pub primary: Option<String>,
    pub degraded: bool,
}

impl From<&FailoverOutcome> for FailoverResponse {
    fn from(outcome: &FailoverOutcome) -> Self {
        Self {
            destination: outcome.destination.to_string(),
            failed_node: outcome.failed_node.to_string(),
            failed_over: outcome.failed_over,
            primary: outcome.primary.as_ref().map(|n| n.id.to_string()),
            degraded: outcome.is_degraded(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReelectResponse {
    pub destination: String,
    pub primary: String,
}
