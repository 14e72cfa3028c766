//! Spot price types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Coins shown on the dashboard when the caller does not pick any
pub const DEFAULT_COIN_IDS: [&str; 4] = ["bitcoin", "ethereum", "solana", "cardano"];

/// Quote currency for every price lookup
pub const VS_CURRENCY: &str = "usd";

/// Spot price for a single coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinQuote {
    pub price: f64,
    /// 24h change in percent
    pub change_24h: Option<f64>,
}

/// Normalized reply for `GET /api/prices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBoard {
    pub vs_currency: String,
    /// Keyed by coin id, in request order
    pub prices: IndexMap<String, CoinQuote>,
}

impl PriceBoard {
    pub fn new() -> Self {
        Self {
            vs_currency: VS_CURRENCY.to_string(),
            prices: IndexMap::new(),
        }
    }
}

impl Default for PriceBoard {
    fn default() -> Self {
        Self::new()
    }
}
