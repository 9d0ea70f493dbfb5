use crate::{
    dto::{ReelectResponse, RegisterRouteRequest, ResolveResponse, RouteResponse},
    handlers::domain_error_response,
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use mesh_agent_application::ports::RouteResolution;
use tracing::{debug, instrument, warn};

#[instrument(skip(state), name = "api_list_routes")]
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteResponse>> {
    let routes: Vec<RouteResponse> = state
        .get_routes
        .get_all()
        .iter()
        .map(RouteResponse::from)
        .collect();
    debug!(count = routes.len(), "Routes retrieved");
    Json(routes)
}

#[instrument(skip(state), name = "api_get_route")]
pub async fn get_route(
    State(state): State<AppState>,
    Path(destination): Path<String>,
) -> Result<Json<RouteResponse>, (StatusCode, String)> {
    match state.get_routes.get(&destination) {
        Some(snapshot) => Ok(Json(RouteResponse::from(&snapshot))),
        None => Err((
            StatusCode::NOT_FOUND,
            format!("Route '{}' not found", destination),
        )),
    }
}

#[instrument(skip(state, req), fields(destination = %req.destination), name = "api_register_route")]
pub async fn register_route(
    State(state): State<AppState>,
    Json(req): Json<RegisterRouteRequest>,
) -> Result<(StatusCode, Json<RouteResponse>), (StatusCode, String)> {
    match state.register_route.execute(&req.destination, &req.nodes) {
        Ok(snapshot) => Ok((StatusCode::CREATED, Json(RouteResponse::from(&snapshot)))),
        Err(e) => {
            warn!(error = %e, "Rejected route registration");
            Err(domain_error_response(e))
        }
    }
}

#[instrument(skip(state), name = "api_remove_route")]
pub async fn remove_route(
    State(state): State<AppState>,
    Path(destination): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.remove_route.execute(&destination) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((
            StatusCode::NOT_FOUND,
            format!("Route '{}' not found", destination),
        ))
    }
}

#[instrument(skip(state), name = "api_resolve_route")]
pub async fn resolve_route(
    State(state): State<AppState>,
    Path(destination): Path<String>,
) -> Result<Json<ResolveResponse>, (StatusCode, String)> {
    match state.resolve_route.execute(&destination) {
        RouteResolution::Resolved(node) => Ok(Json(ResolveResponse {
            destination,
            node: node.id.to_string(),
        })),
        RouteResolution::Degraded => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            format!("Route '{}' has no healthy edge node", destination),
        )),
        RouteResolution::Unknown => Err((
            StatusCode::NOT_FOUND,
            format!("Route '{}' not found", destination),
        )),
    }
}

#[instrument(skip(state), name = "api_reelect_primary")]
pub async fn reelect_primary(
    State(state): State<AppState>,
    Path(destination): Path<String>,
) -> Result<Json<ReelectResponse>, (StatusCode, String)> {
    match state.reelect_primary.execute(&destination) {
        Ok(Some(primary)) => Ok(Json(ReelectResponse {
            destination,
            primary: primary.id.to_string(),
        })),
        Ok(None) => Err((
            StatusCode::SERVICE_UNAVAILABLE,
            format!("Route '{}' has no healthy edge node", destination),
        )),
        Err(e) => Err(domain_error_response(e)),
    }
}
