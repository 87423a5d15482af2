//! In-process stand-in for AnkiConnect used by unit tests.

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::net::TcpListener;
use std::time::Duration;

/// Canned behaviour for the fake endpoint.
#[derive(Clone)]
pub struct FakeAnki {
    pub reviews: Value,
    pub status: StatusCode,
    pub delay: Duration,
}

impl FakeAnki {
    pub fn new(reviews: Value) -> Self {
        Self {
            reviews,
            status: StatusCode::OK,
            delay: Duration::ZERO,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

async fn respond(
    State(fake): State<FakeAnki>,
    Json(request): Json<Value>,
) -> (StatusCode, Json<Value>) {
    tokio::time::sleep(fake.delay).await;
    let body = match request["action"].as_str() {
        Some("deckNames") => json!({ "result": ["Default", "Japanese"], "error": null }),
        Some("getNumCardsReviewedByDay") => fake.reviews.clone(),
        _ => json!({ "result": null, "error": "unsupported action" }),
    };
    (fake.status, Json(body))
}

/// Serves `reviews` as the `getNumCardsReviewedByDay` envelope and returns the base URL.
pub async fn spawn_upstream(reviews: Value) -> String {
    spawn_fake(FakeAnki::new(reviews)).await
}

pub async fn spawn_fake(fake: FakeAnki) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake upstream");
    let addr = listener.local_addr().expect("fake upstream addr");
    let app = Router::new().route("/", post(respond)).with_state(fake);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

/// A URL on a port nothing is listening on.
pub fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn unique_cache_path(tag: &str) -> std::path::PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("anki_heatmap_{tag}_{}_{}.json", std::process::id(), nanos));
    path
}
