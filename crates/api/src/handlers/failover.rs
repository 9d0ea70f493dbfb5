use crate::{
    dto::{FailoverRequest, FailoverResponse},
    handlers::domain_error_response,
    state::AppState,
};
use axum::{extract::State, http::StatusCode, response::Json};
use tracing::instrument;

#[instrument(
    skip(state, req),
    fields(destination = %req.destination, node = %req.node),
    name = "api_trigger_failover"
)]
pub async fn trigger_failover(
    State(state): State<AppState>,
    Json(req): Json<FailoverRequest>,
) -> Result<Json<FailoverResponse>, (StatusCode, String)> {
    state
        .trigger_failover
        .execute(&req.destination, &req.node)
        .map(|outcome| Json(FailoverResponse::from(&outcome)))
        .map_err(domain_error_response)
}
