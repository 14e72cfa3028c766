//! Indicator proxy
//!
//! Turns "RSI for symbol X" into one TAAPI call and reshapes the reply.

use dashboard_core::{DashboardError, DashboardResult, IndicatorReport, TAAPI_KEY_MISSING};
use dashboard_feeds::TaapiClient;
use tracing::{info, instrument, warn};

/// Indicator lookups backed by TAAPI
#[derive(Debug, Clone)]
pub struct IndicatorService {
    /// `None` when no API key is configured
    client: Option<TaapiClient>,
}

impl IndicatorService {
    pub fn new(client: Option<TaapiClient>) -> Self {
        Self { client }
    }

    /// Build from an optional API key; blank keys count as missing
    pub fn from_api_key(api_key: Option<String>, base_url: &str) -> Self {
        let client = api_key
            .filter(|key| !key.trim().is_empty())
            .map(|key| TaapiClient::with_base_url(key, base_url));
        Self::new(client)
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Fetch the indicator set for `symbol`, taken verbatim from the caller
    #[instrument(skip(self))]
    pub async fn get_indicator(&self, symbol: &str) -> DashboardResult<IndicatorReport> {
        let Some(client) = &self.client else {
            return Err(DashboardError::config(TAAPI_KEY_MISSING));
        };

        match client.rsi(symbol).await {
            Ok(rsi) => {
                info!("RSI for {}: {:?}", symbol, rsi);
                Ok(IndicatorReport::new(symbol, rsi))
            }
            Err(e) => {
                warn!("Indicator lookup for {} failed: {}", symbol, e);
                Err(e)
            }
        }
    }
}
