//! Indicator response types

use serde::{Deserialize, Serialize};

/// Indicator values for a single symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    /// Relative Strength Index, `None` when the provider returned no value
    pub rsi: Option<f64>,
}

/// Normalized reply for `GET /api/indicators/{symbol}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReport {
    /// Symbol exactly as received from the caller
    pub symbol: String,
    pub indicators: Indicators,
}

impl IndicatorReport {
    pub fn new(symbol: impl Into<String>, rsi: Option<f64>) -> Self {
        Self {
            symbol: symbol.into(),
            indicators: Indicators { rsi },
        }
    }
}
