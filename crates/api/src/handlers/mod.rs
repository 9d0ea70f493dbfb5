pub mod cache;
pub mod failover;
pub mod health;
pub mod metrics;
pub mod nodes;
pub mod routes;

pub use cache::{delete_session, get_session, put_session};
pub use failover::trigger_failover;
pub use health::health_check;
pub use metrics::get_edge_metrics;
pub use nodes::mark_node_healthy;
pub use routes::{
    get_route, list_routes, reelect_primary, register_route, remove_route, resolve_route,
};

use axum::http::StatusCode;
use mesh_agent_domain::DomainError;

pub(crate) fn domain_error_status(err: &DomainError) -> StatusCode {
    match err {
        DomainError::InvalidRoute(_) => StatusCode::BAD_REQUEST,
        DomainError::UnknownRoute(_) | DomainError::UnknownNode(_) => StatusCode::NOT_FOUND,
    }
}

pub(crate) fn domain_error_response(err: DomainError) -> (StatusCode, String) {
    (domain_error_status(&err), err.to_string())
}
