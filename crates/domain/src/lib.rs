//! Mesh Agent Domain Layer
pub mod config;
pub mod edge_node;
pub mod errors;
pub mod metrics;
pub mod route;

pub use config::{CliOverrides, Config, ConfigError};
pub use edge_node::EdgeNode;
pub use errors::DomainError;
pub use metrics::{CacheStats, EdgeMetrics, RoutingStats};
pub use route::{FailoverOutcome, RouteSnapshot};
