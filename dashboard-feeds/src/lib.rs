//! Upstream market data clients for the Crypto Dashboard
//!
//! This crate provides clients for fetching data from:
//! - TAAPI.IO: technical indicators (requires an API key)
//! - CoinGecko: spot prices (public)

pub mod coingecko;
pub mod taapi;

pub use coingecko::{CoinGeckoClient, COINGECKO_API_BASE};
pub use taapi::{TaapiClient, TAAPI_API_BASE};
