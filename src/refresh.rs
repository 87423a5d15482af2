use crate::anki::AnkiClient;
use crate::config::Config;
use crate::errors::RefreshError;
use crate::storage::persist_snapshot;

/// One fetch-and-cache cycle. Returns the number of days written.
///
/// The live fetch must succeed before the snapshot is touched, so a failed
/// run never replaces good cached data. The fetch is not time-bounded; only
/// request-serving paths use `fetch_timeout`.
pub async fn run_once(config: &Config) -> Result<usize, RefreshError> {
    let series = AnkiClient::new(config)
        .fetch_reviews_by_day_with(None)
        .await?;
    persist_snapshot(&config.cache_path, &series).await?;
    Ok(series.len())
}
