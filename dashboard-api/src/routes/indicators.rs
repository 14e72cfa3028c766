//! Indicator endpoints

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use dashboard_core::IndicatorReport;

use crate::{ApiError, AppState};

/// GET /api/indicators/{symbol}
///
/// The symbol is forwarded exactly as it appears in the path.
async fn get_indicators(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<IndicatorReport>, ApiError> {
    let report = state.indicator_service.get_indicator(&symbol).await?;
    Ok(Json(report))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/indicators/{symbol}", get(get_indicators))
}
