//! Core types for the Crypto Dashboard
//!
//! This crate defines the shared data structures used across the dashboard,
//! including indicator and price replies and the price channel protocol.

pub mod error;
pub mod indicator;
pub mod price;
pub mod websocket;

pub use error::{DashboardError, DashboardResult, TAAPI_KEY_MISSING};
pub use indicator::{IndicatorReport, Indicators};
pub use price::{CoinQuote, PriceBoard, DEFAULT_COIN_IDS, VS_CURRENCY};
pub use websocket::{broadcast_text, ChannelMode, EchoReply};
