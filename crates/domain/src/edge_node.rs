use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A candidate edge node for a destination.
///
/// Health follows a two-state machine: `Healthy -> Unhealthy` through
/// [`EdgeNode::mark_failed`] and back through [`EdgeNode::mark_healthy`].
/// Repeating either transition only refreshes the failure timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeNode {
    pub id: Arc<str>,
    pub healthy: bool,
    pub last_failure: Option<DateTime<Utc>>,
}

impl EdgeNode {
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            healthy: true,
            last_failure: None,
        }
    }

    /// Node registered in a failed state, e.g. re-registering after an outage.
    pub fn unhealthy(id: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            healthy: false,
            last_failure: None,
        }
    }

    pub fn mark_failed(&mut self, at: DateTime<Utc>) {
        self.healthy = false;
        self.last_failure = Some(at);
    }

    /// Clears the unhealthy flag. `last_failure` is kept as history.
    pub fn mark_healthy(&mut self) {
        self.healthy = true;
    }

    pub fn validate_id(id: &str) -> Result<(), String> {
        if id.is_empty() {
            return Err("Node id cannot be empty".to_string());
        }

        if id.len() > 253 {
            return Err("Node id cannot exceed 253 characters".to_string());
        }

        if id.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(format!("Node id '{}' contains whitespace", id));
        }

        Ok(())
    }
}
