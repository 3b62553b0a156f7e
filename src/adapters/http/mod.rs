//! HTTP interface: three unauthenticated GET routes answered from static
//! data. Unmatched paths and methods fall through to axum's default
//! 404/405 responses.

pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod state;

use axum::{routing::get, Router};
use tower::ServiceBuilder;

pub use responses::{HealthResponse, RootResponse};
pub use state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .with_state(state)
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_request)))
}
