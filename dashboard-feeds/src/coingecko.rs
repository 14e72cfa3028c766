//! CoinGecko API client for spot prices
//!
//! Free public API, no authentication required.

use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, info, instrument};

use dashboard_core::{CoinQuote, DashboardError, DashboardResult, PriceBoard, VS_CURRENCY};

pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com";

/// One entry of the `/simple/price` response
#[derive(Debug, Deserialize)]
struct SimplePrice {
    usd: Option<f64>,
    usd_24h_change: Option<f64>,
}

/// CoinGecko API client
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http: Client,
    base_url: String,
}

impl CoinGeckoClient {
    pub fn new() -> Self {
        Self::with_base_url(COINGECKO_API_BASE)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch USD prices and 24h change for the given coin ids
    ///
    /// Coins the API does not know are left out of the board.
    #[instrument(skip(self), fields(count = ids.len()))]
    pub async fn simple_prices(&self, ids: &[String]) -> DashboardResult<PriceBoard> {
        if ids.is_empty() {
            return Err(DashboardError::invalid_request("no coin ids requested"));
        }

        let url = format!("{}/api/v3/simple/price", self.base_url);
        let joined = ids.join(",");
        debug!("[CoinGecko] GET {} ids={}", url, joined);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("ids", joined.as_str()),
                ("vs_currencies", VS_CURRENCY),
                ("include_24hr_change", "true"),
            ])
            .send()
            .await
            .map_err(|e| DashboardError::network(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DashboardError::api(status.as_u16(), body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::network(e.without_url().to_string()))?;
        let mut raw: HashMap<String, SimplePrice> =
            serde_json::from_str(&body).map_err(|e| DashboardError::parse(e.to_string()))?;

        let mut board = PriceBoard::new();
        for id in ids {
            if let Some(SimplePrice {
                usd: Some(price),
                usd_24h_change,
            }) = raw.remove(id)
            {
                board.prices.insert(
                    id.clone(),
                    CoinQuote {
                        price,
                        change_24h: usd_24h_change,
                    },
                );
            }
        }

        info!(
            "[CoinGecko] Fetched {} of {} requested prices",
            board.prices.len(),
            ids.len()
        );
        Ok(board)
    }
}

impl Default for CoinGeckoClient {
    fn default() -> Self {
        Self::new()
    }
}
