//! Client for the AnkiConnect add-on's local HTTP API.

use crate::config::Config;
use crate::errors::DataSourceError;
use crate::models::{AnkiRequest, AnkiResponse, ReviewSeries};
use serde::de::DeserializeOwned;
use std::time::Duration;

const API_VERSION: u8 = 6;
const ACTION_DECK_NAMES: &str = "deckNames";
const ACTION_REVIEWS_BY_DAY: &str = "getNumCardsReviewedByDay";

#[derive(Clone)]
pub struct AnkiClient {
    http: reqwest::Client,
    url: String,
    fetch_timeout: Duration,
}

impl AnkiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.anki_url.clone(),
            fetch_timeout: config.fetch_timeout,
        }
    }

    /// Returns the decoded `deckNames` body as-is, whatever the HTTP status.
    /// No timeout is applied.
    pub async fn deck_names(&self) -> Result<serde_json::Value, DataSourceError> {
        let response = self
            .http
            .post(&self.url)
            .json(&request(ACTION_DECK_NAMES))
            .send()
            .await?;
        Ok(response.json().await?)
    }

    /// Day-bucketed review counts, bounded by the configured fetch timeout.
    pub async fn fetch_reviews_by_day(&self) -> Result<ReviewSeries, DataSourceError> {
        self.fetch_reviews_by_day_with(Some(self.fetch_timeout))
            .await
    }

    /// Day-bucketed review counts; `None` waits for the upstream indefinitely.
    pub async fn fetch_reviews_by_day_with(
        &self,
        timeout: Option<Duration>,
    ) -> Result<ReviewSeries, DataSourceError> {
        self.call(ACTION_REVIEWS_BY_DAY, timeout).await
    }

    async fn call<T: DeserializeOwned>(
        &self,
        action: &str,
        timeout: Option<Duration>,
    ) -> Result<T, DataSourceError> {
        let mut builder = self.http.post(&self.url).json(&request(action));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let envelope: AnkiResponse<T> = builder.send().await?.error_for_status()?.json().await?;
        match envelope {
            AnkiResponse {
                error: Some(message),
                ..
            } => Err(DataSourceError::Upstream(message)),
            AnkiResponse {
                result: Some(result),
                ..
            } => Ok(result),
            _ => Err(DataSourceError::MissingResult),
        }
    }
}

fn request(action: &str) -> AnkiRequest<'_> {
    AnkiRequest {
        action,
        version: API_VERSION,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReviewRecord;
    use crate::testing::{spawn_fake, spawn_upstream, unreachable_url, FakeAnki};
    use axum::http::StatusCode;
    use chrono::NaiveDate;
    use serde_json::json;

    fn client_for(url: String) -> AnkiClient {
        AnkiClient::new(&Config {
            anki_url: url,
            ..Config::default()
        })
    }

    #[tokio::test]
    async fn fetch_decodes_result_pairs() {
        let url = spawn_upstream(json!({
            "result": [["2024-10-17", 1234], ["2024-10-18", 50]],
            "error": null
        }))
        .await;

        let series = client_for(url).fetch_reviews_by_day().await.unwrap();
        assert_eq!(
            series,
            vec![
                ReviewRecord(NaiveDate::from_ymd_opt(2024, 10, 17).unwrap(), 1234),
                ReviewRecord(NaiveDate::from_ymd_opt(2024, 10, 18).unwrap(), 50),
            ]
        );
    }

    #[tokio::test]
    async fn fetch_surfaces_upstream_error_field() {
        let url = spawn_upstream(json!({ "result": null, "error": "collection is not available" })).await;

        let err = client_for(url).fetch_reviews_by_day().await.unwrap_err();
        match err {
            DataSourceError::Upstream(message) => assert_eq!(message, "collection is not available"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn fetch_rejects_null_result_without_error() {
        let url = spawn_upstream(json!({ "result": null, "error": null })).await;

        let err = client_for(url).fetch_reviews_by_day().await.unwrap_err();
        assert!(matches!(err, DataSourceError::MissingResult));
    }

    #[tokio::test]
    async fn fetch_fails_when_unreachable() {
        let err = client_for(unreachable_url())
            .fetch_reviews_by_day()
            .await
            .unwrap_err();
        assert!(matches!(err, DataSourceError::Transport(_)));
    }

    #[tokio::test]
    async fn deck_names_returns_envelope_verbatim() {
        let url = spawn_upstream(json!({ "result": [], "error": null })).await;

        let body = client_for(url).deck_names().await.unwrap();
        assert_eq!(body, json!({ "result": ["Default", "Japanese"], "error": null }));
    }

    #[tokio::test]
    async fn fetch_fails_on_error_status() {
        let url = spawn_fake(
            FakeAnki::new(json!({ "result": [["2024-10-18", 50]], "error": null }))
                .with_status(StatusCode::INTERNAL_SERVER_ERROR),
        )
        .await;

        let err = client_for(url).fetch_reviews_by_day().await.unwrap_err();
        match err {
            DataSourceError::Transport(inner) => {
                assert_eq!(inner.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn deck_names_ignores_error_status() {
        let url = spawn_fake(
            FakeAnki::new(json!({ "result": [], "error": null }))
                .with_status(StatusCode::SERVICE_UNAVAILABLE),
        )
        .await;

        let body = client_for(url).deck_names().await.unwrap();
        assert_eq!(body, json!({ "result": ["Default", "Japanese"], "error": null }));
    }

    #[tokio::test]
    async fn slow_upstream_only_fails_the_timed_fetch() {
        let url = spawn_fake(
            FakeAnki::new(json!({ "result": [["2024-10-18", 50]], "error": null }))
                .with_delay(Duration::from_millis(400)),
        )
        .await;
        let client = AnkiClient::new(&Config {
            anki_url: url,
            fetch_timeout: Duration::from_millis(100),
            ..Config::default()
        });

        let err = client.fetch_reviews_by_day().await.unwrap_err();
        assert!(matches!(err, DataSourceError::Transport(ref inner) if inner.is_timeout()));

        let series = client.fetch_reviews_by_day_with(None).await.unwrap();
        assert_eq!(
            series,
            vec![ReviewRecord(NaiveDate::from_ymd_opt(2024, 10, 18).unwrap(), 50)]
        );
    }
}
