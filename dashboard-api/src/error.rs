//! Mapping from service errors to JSON responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use dashboard_core::DashboardError;
use serde::Serialize;

/// Error body returned by every failing endpoint
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Handler error wrapper
///
/// A missing credential is reported with status 200 so the dashboard
/// reads it from the body. Upstream failures become 502.
#[derive(Debug)]
pub struct ApiError(pub DashboardError);

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        if self.0.is_upstream() {
            return StatusCode::BAD_GATEWAY;
        }

        match &self.0 {
            DashboardError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::OK,
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_core::TAAPI_KEY_MISSING;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError(DashboardError::config(TAAPI_KEY_MISSING)).status_code(),
            StatusCode::OK
        );
        assert_eq!(
            ApiError(DashboardError::invalid_request("no ids")).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(DashboardError::network("timed out")).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError(DashboardError::api(500, "")).status_code(),
            StatusCode::BAD_GATEWAY
        );
    }
}
