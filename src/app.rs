use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/anki-stats", get(handlers::anki_stats))
        .route("/api/review-data", get(handlers::review_data))
        .route("/anki-heatmap", get(handlers::anki_heatmap))
        .with_state(state)
}
