use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/chart/bar", get(handlers::bar_chart))
        .route("/chart/scatter", get(handlers::scatter_chart))
        .route("/chart/heat", get(handlers::heat_chart))
        .route("/api/datasets", get(handlers::get_catalog))
        .route("/api/bar/:dataset", get(handlers::get_bar_series))
        .route("/api/scatter/:dataset", get(handlers::get_scatter_series))
        .route("/api/heat/:dataset", get(handlers::get_heat_series))
        .route("/api/reload", post(handlers::reload))
        .with_state(state)
}
