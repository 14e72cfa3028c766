//! TAAPI.IO client for technical indicators
//!
//! Only the RSI endpoint is used. Every lookup is pinned to Binance
//! USDT pairs on the 5 minute interval.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use dashboard_core::{DashboardError, DashboardResult};

pub const TAAPI_API_BASE: &str = "https://api.taapi.io";

const EXCHANGE: &str = "binance";
const QUOTE_CURRENCY: &str = "USDT";
const INTERVAL: &str = "5m";

/// Single-value indicator body, e.g. `{"value": 55.3}`
#[derive(Debug, Deserialize)]
struct IndicatorValue {
    #[serde(default)]
    value: Option<f64>,
}

/// TAAPI.IO API client
#[derive(Clone)]
pub struct TaapiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl TaapiClient {
    /// Create a client against the public TAAPI endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, TAAPI_API_BASE)
    }

    /// Create a client against a custom base URL
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current RSI for `symbol` quoted in USDT
    ///
    /// The symbol is sent as given. A body without a `value` field yields `Ok(None)`.
    #[instrument(skip(self))]
    pub async fn rsi(&self, symbol: &str) -> DashboardResult<Option<f64>> {
        let url = format!("{}/rsi", self.base_url);
        let pair = format!("{}/{}", symbol, QUOTE_CURRENCY);
        debug!("[TAAPI] GET {} pair={} interval={}", url, pair, INTERVAL);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("secret", self.api_key.as_str()),
                ("exchange", EXCHANGE),
                ("symbol", pair.as_str()),
                ("interval", INTERVAL),
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
        let parsed: IndicatorValue =
            serde_json::from_str(&body).map_err(|e| DashboardError::parse(e.to_string()))?;

        debug!("[TAAPI] RSI for {}: {:?}", pair, parsed.value);
        Ok(parsed.value)
    }
}

impl std::fmt::Debug for TaapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaapiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
