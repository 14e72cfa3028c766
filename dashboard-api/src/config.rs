//! Server configuration loaded from the environment

use dashboard_core::ChannelMode;
use dashboard_feeds::{COINGECKO_API_BASE, TAAPI_API_BASE};
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use url::Url;

const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration for the API server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    /// TAAPI credential; `None` disables indicator lookups
    pub taapi_api_key: Option<String>,
    pub taapi_base_url: String,
    pub coingecko_base_url: String,
    pub channel_mode: ChannelMode,
}

impl ServerConfig {
    /// Load configuration from process environment variables
    ///
    /// Recognized:
    /// - TAAPI_API_KEY: TAAPI credential (optional)
    /// - PORT: listen port, default 8000
    /// - HOST: listen address, default 0.0.0.0
    /// - TAAPI_BASE_URL, COINGECKO_BASE_URL: upstream overrides
    /// - WS_PRICE_MODE: `broadcast` (default) or `echo`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let taapi_api_key = lookup("TAAPI_API_KEY").filter(|key| !key.trim().is_empty());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                field: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let host = match lookup("HOST") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                field: "HOST",
                value: raw,
            })?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let channel_mode = match lookup("WS_PRICE_MODE") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                field: "WS_PRICE_MODE",
                value: raw,
            })?,
            None => ChannelMode::default(),
        };

        let taapi_base_url = base_url(&lookup, "TAAPI_BASE_URL", TAAPI_API_BASE)?;
        let coingecko_base_url = base_url(&lookup, "COINGECKO_BASE_URL", COINGECKO_API_BASE)?;

        Ok(Self {
            host,
            port,
            taapi_api_key,
            taapi_base_url,
            coingecko_base_url,
            channel_mode,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            taapi_api_key: None,
            taapi_base_url: TAAPI_API_BASE.to_string(),
            coingecko_base_url: COINGECKO_API_BASE.to_string(),
            channel_mode: ChannelMode::default(),
        }
    }
}

fn base_url<F>(lookup: &F, field: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(field) else {
        return Ok(default.to_string());
    };

    match Url::parse(raw.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {
            Ok(url.as_str().trim_end_matches('/').to_string())
        }
        _ => Err(ConfigError::InvalidUrl { field, value: raw }),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {field}: '{value}'")]
    Invalid { field: &'static str, value: String },

    #[error("{field} must be an http(s) URL, got '{value}'")]
    InvalidUrl { field: &'static str, value: String },
}
