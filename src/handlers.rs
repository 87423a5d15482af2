use crate::cleaner::clean;
use crate::errors::AppError;
use crate::models::ReviewSeries;
use crate::state::AppState;
use crate::storage::load_or_refresh;
use crate::ui::{render_heatmap_page, render_index};
use axum::{extract::State, response::Html, Json};
use tracing::error;

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

pub async fn anki_stats(State(state): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let body = state.anki.deck_names().await?;
    Ok(Json(body))
}

/// Direct query with no snapshot fallback; any failure yields `[]`.
pub async fn review_data(State(state): State<AppState>) -> Json<ReviewSeries> {
    match state.anki.fetch_reviews_by_day().await {
        Ok(series) => Json(series),
        Err(err) => {
            error!("AnkiConnect query failed: {err}");
            Json(ReviewSeries::new())
        }
    }
}

pub async fn anki_heatmap(State(state): State<AppState>) -> Html<String> {
    let series = clean(load_or_refresh(&state.anki, &state.cache_path).await);
    Html(render_heatmap_page(&series))
}
