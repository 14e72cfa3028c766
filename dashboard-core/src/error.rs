//! Error types for the dashboard

use thiserror::Error;

/// Message returned to callers when the TAAPI credential is missing
pub const TAAPI_KEY_MISSING: &str = "TAAPI API key not configured";

/// Dashboard-wide error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashboardError {
    #[error("{0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Upstream API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl DashboardError {
    pub fn config(msg: impl Into<String>) -> Self {
        DashboardError::Config(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        DashboardError::Network(msg.into())
    }

    pub fn api(status: u16, message: impl Into<String>) -> Self {
        DashboardError::Api {
            status,
            message: message.into(),
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        DashboardError::Parse(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        DashboardError::InvalidRequest(msg.into())
    }

    /// True when the failure came from talking to an upstream provider
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            DashboardError::Network(_) | DashboardError::Api { .. } | DashboardError::Parse(_)
        )
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
