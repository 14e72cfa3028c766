//! WebSocket message types for the price channel
//!
//! Clients send free-form text frames. The server relays them in one of
//! two modes, see [`ChannelMode`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the price channel relays a received text frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelMode {
    /// Send `Received: <text>` to every open connection
    #[default]
    Broadcast,
    /// Reply `{"message": "Echo: <text>"}` to the sender only
    Echo,
}

impl FromStr for ChannelMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "broadcast" => Ok(Self::Broadcast),
            "echo" => Ok(Self::Echo),
            other => Err(format!(
                "unknown channel mode '{}', expected 'broadcast' or 'echo'",
                other
            )),
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Broadcast => write!(f, "broadcast"),
            Self::Echo => write!(f, "echo"),
        }
    }
}

/// Reply sent to the sender in echo mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EchoReply {
    pub message: String,
}

impl EchoReply {
    pub fn for_text(text: &str) -> Self {
        Self {
            message: format!("Echo: {}", text),
        }
    }
}

/// Text relayed to every connection in broadcast mode
pub fn broadcast_text(text: &str) -> String {
    format!("Received: {}", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_channel_mode() {
        assert_eq!("broadcast".parse::<ChannelMode>(), Ok(ChannelMode::Broadcast));
        assert_eq!(" ECHO ".parse::<ChannelMode>(), Ok(ChannelMode::Echo));
        assert!("fanout".parse::<ChannelMode>().is_err());
    }

    #[test]
    fn test_echo_reply_json() {
        let json = serde_json::to_string(&EchoReply::for_text("hi")).unwrap();
        assert_eq!(json, r#"{"message":"Echo: hi"}"#);
    }

    #[test]
    fn test_broadcast_text() {
        assert_eq!(broadcast_text("ping"), "Received: ping");
    }
}
