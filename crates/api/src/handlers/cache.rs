use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

#[instrument(skip(state), name = "api_get_session")]
pub async fn get_session(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Bytes, (StatusCode, String)> {
    state
        .get_session
        .execute(&key)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Session '{}' not found", key)))
}

#[instrument(skip(state, body), name = "api_put_session")]
pub async fn put_session(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Bytes,
) -> StatusCode {
    state.put_session.execute(&key, body);
    StatusCode::NO_CONTENT
}

#[instrument(skip(state), name = "api_delete_session")]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, (StatusCode, String)> {
    if state.delete_session.execute(&key) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err((StatusCode::NOT_FOUND, format!("Session '{}' not found", key)))
    }
}
