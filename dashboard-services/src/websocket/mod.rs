//! WebSocket infrastructure for the price channel
//!
//! This module provides the connection registry and the per-connection
//! handler behind `/ws/price`.

mod handler;
mod registry;

pub use handler::{Frame, PriceChannel};
pub use registry::{ConnectionId, ConnectionRegistry, Outbound, OUTBOUND_CAPACITY};
