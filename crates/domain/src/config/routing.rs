use serde::{Deserialize, Serialize};

/// Route registered when the agent starts.
///
/// Nodes are listed in failover order; the first one becomes the primary.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StaticRoute {
    pub destination: String,
    pub nodes: Vec<String>,
}
