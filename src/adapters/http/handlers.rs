use axum::{extract::State, Json};

use super::responses::{HealthResponse, RootResponse};
use super::state::AppState;

/// GET /health: liveness probe.
pub async fn health_check(_state: State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// GET /ready: readiness probe. No downstream checks yet, so always ready.
pub async fn readiness_check(_state: State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::ready())
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse::greeting())
}
