//! Spot price proxy backed by CoinGecko

use dashboard_core::{DashboardResult, PriceBoard, DEFAULT_COIN_IDS};
use dashboard_feeds::CoinGeckoClient;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct PriceService {
    client: CoinGeckoClient,
    default_ids: Vec<String>,
}

impl PriceService {
    pub fn new(client: CoinGeckoClient) -> Self {
        Self {
            client,
            default_ids: DEFAULT_COIN_IDS.iter().map(|id| id.to_string()).collect(),
        }
    }

    pub fn default_ids(&self) -> &[String] {
        &self.default_ids
    }

    /// Fetch prices for `requested`, or the dashboard defaults when `None`
    pub async fn get_prices(&self, requested: Option<Vec<String>>) -> DashboardResult<PriceBoard> {
        let ids = requested.unwrap_or_else(|| self.default_ids.clone());

        self.client.simple_prices(&ids).await.inspect_err(|e| {
            warn!("Price lookup failed: {}", e);
        })
    }
}

/// Split a comma separated `ids` query value, dropping blanks
pub fn parse_coin_ids(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coin_ids() {
        assert_eq!(parse_coin_ids("bitcoin, ethereum,,"), vec!["bitcoin", "ethereum"]);
        assert!(parse_coin_ids(" , ").is_empty());
    }

    #[test]
    fn test_default_ids() {
        let service = PriceService::new(CoinGeckoClient::new());
        assert_eq!(
            service.default_ids(),
            &["bitcoin", "ethereum", "solana", "cardano"]
        );
    }
}
