use crate::{handlers::domain_error_response, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

#[instrument(skip(state), name = "api_mark_node_healthy")]
pub async fn mark_node_healthy(
    State(state): State<AppState>,
    Path(node): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    state
        .mark_healthy
        .execute(&node)
        .map(|_| StatusCode::NO_CONTENT)
        .map_err(domain_error_response)
}
