use crate::anki::AnkiClient;
use crate::errors::SnapshotError;
use crate::models::ReviewSeries;
use std::path::Path;
use tokio::fs;
use tracing::{error, warn};

pub async fn load_snapshot(path: &Path) -> Result<ReviewSeries, SnapshotError> {
    let bytes = fs::read(path).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Overwrites the snapshot with `series`, creating the parent directory if needed.
pub async fn persist_snapshot(path: &Path, series: &ReviewSeries) -> std::io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let payload = serde_json::to_vec(series)?;
    fs::write(path, payload).await
}

/// Live fetch with snapshot fallback. Never fails: the worst case is an empty series.
pub async fn load_or_refresh(client: &AnkiClient, path: &Path) -> ReviewSeries {
    match client.fetch_reviews_by_day().await {
        Ok(series) => {
            if let Err(err) = persist_snapshot(path, &series).await {
                error!("failed to write snapshot {}: {err}", path.display());
            }
            series
        }
        Err(err) => {
            warn!("live query failed, loading cached data: {err}");
            match load_snapshot(path).await {
                Ok(series) => series,
                Err(err) => {
                    warn!("no cached data available: {err}");
                    ReviewSeries::new()
                }
            }
        }
    }
}
