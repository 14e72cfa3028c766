//! Spot price endpoints

use axum::{
    extract::{Query, State},
    response::Json,
    routing::get,
    Router,
};
use dashboard_core::PriceBoard;
use dashboard_services::parse_coin_ids;
use serde::Deserialize;

use crate::{ApiError, AppState};

#[derive(Debug, Deserialize)]
struct PricesQuery {
    /// Comma separated CoinGecko ids, e.g. `bitcoin,ethereum`
    ids: Option<String>,
}

/// GET /api/prices?ids=...
async fn get_prices(
    State(state): State<AppState>,
    Query(query): Query<PricesQuery>,
) -> Result<Json<PriceBoard>, ApiError> {
    let requested = query.ids.as_deref().map(parse_coin_ids);
    let board = state.price_service.get_prices(requested).await?;
    Ok(Json(board))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/prices", get(get_prices))
}
