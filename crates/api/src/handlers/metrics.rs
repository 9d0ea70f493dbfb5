use crate::{dto::EdgeMetricsResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_get_edge_metrics")]
pub async fn get_edge_metrics(State(state): State<AppState>) -> Json<EdgeMetricsResponse> {
    let metrics = state.get_metrics.execute();

    debug!(
        entries = metrics.cache.entries,
        hit_rate = metrics.cache.hit_rate,
        routes = metrics.routing.total_routes,
        degraded = metrics.routing.degraded_routes,
        "Edge metrics collected"
    );

    Json(metrics.into())
}
