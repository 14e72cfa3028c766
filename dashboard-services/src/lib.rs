//! Services for the Crypto Dashboard
//!
//! This crate provides the price channel connection registry and the
//! upstream proxies that back the HTTP API.

pub mod indicator_service;
pub mod price_service;
pub mod websocket;

pub use indicator_service::IndicatorService;
pub use price_service::{parse_coin_ids, PriceService};
pub use websocket::{
    ConnectionId, ConnectionRegistry, Frame, Outbound, PriceChannel, OUTBOUND_CAPACITY,
};
