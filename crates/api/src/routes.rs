use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/cache/{key}",
            get(handlers::get_session)
                .put(handlers::put_session)
                .delete(handlers::delete_session),
        )
        .route(
            "/routes",
            get(handlers::list_routes).post(handlers::register_route),
        )
        .route(
            "/routes/{destination}",
            get(handlers::get_route).delete(handlers::remove_route),
        )
        .route(
            "/routes/{destination}/reelect",
            post(handlers::reelect_primary),
        )
        .route("/route/{destination}", get(handlers::resolve_route))
        .route("/failover", post(handlers::trigger_failover))
        .route("/nodes/{node}/healthy", post(handlers::mark_node_healthy))
        .route("/metrics/edge", get(handlers::get_edge_metrics))
        .with_state(state)
}
