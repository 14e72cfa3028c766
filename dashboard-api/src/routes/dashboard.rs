//! Static dashboard page

use axum::{response::Html, routing::get, Router};

use crate::AppState;

const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(dashboard))
}
