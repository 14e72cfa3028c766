//! Crypto Dashboard API Server
//!
//! HTTP API that proxies TAAPI indicators and CoinGecko prices, serves the
//! dashboard page, and hosts the `/ws/price` relay channel.

pub mod config;
mod error;
mod routes;

use axum::Router;
use dashboard_feeds::CoinGeckoClient;
use dashboard_services::{ConnectionRegistry, IndicatorService, PriceChannel, PriceService};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use config::{ConfigError, ServerConfig};
pub use error::ApiError;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub indicator_service: Arc<IndicatorService>,
    pub price_service: Arc<PriceService>,
    pub price_channel: PriceChannel,
}

impl AppState {
    /// Wire up services for the given configuration
    pub fn from_config(config: &ServerConfig) -> Self {
        let indicator_service =
            IndicatorService::from_api_key(config.taapi_api_key.clone(), &config.taapi_base_url);
        let price_service =
            PriceService::new(CoinGeckoClient::with_base_url(&config.coingecko_base_url));
        let registry = Arc::new(ConnectionRegistry::new());

        Self {
            indicator_service: Arc::new(indicator_service),
            price_service: Arc::new(price_service),
            price_channel: PriceChannel::new(registry, config.channel_mode),
        }
    }

    pub fn registry(&self) -> &Arc<ConnectionRegistry> {
        self.price_channel.registry()
    }
}

/// Build the Axum application router
pub fn build_router(state: AppState) -> Router {
    // Public read-only demo: any origin, method and header
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::root_routes())
        .nest("/api", routes::api_routes())
        .merge(routes::ws_routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
