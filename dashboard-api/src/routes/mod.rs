//! API route definitions

mod dashboard;
mod health;
mod indicators;
mod prices;
pub mod ws;

use axum::Router;
use crate::AppState;

/// Top-level routes: dashboard page and health check
pub fn root_routes() -> Router<AppState> {
    Router::new()
        .merge(dashboard::routes())
        .merge(health::routes())
}

/// Create all routes mounted under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::status_routes())
        .merge(indicators::routes())
        .merge(prices::routes())
}

/// Create WebSocket routes (separate from API)
pub fn ws_routes() -> Router<AppState> {
    ws::routes()
}
