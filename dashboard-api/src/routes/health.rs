//! Health and status endpoints

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// Service status response
#[derive(Debug, Serialize)]
struct StatusResponse {
    message: &'static str,
    status: &'static str,
    /// Open `/ws/price` connections
    connections: usize,
    taapi_configured: bool,
}

/// Liveness check, independent of upstreams and configuration
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn api_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Crypto ML Dashboard API",
        status: "running",
        connections: state.registry().len(),
        taapi_configured: state.indicator_service.is_configured(),
    })
}

/// Create health routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// Create status routes (mounted under `/api`)
pub fn status_routes() -> Router<AppState> {
    Router::new().route("/status", get(api_status))
}
