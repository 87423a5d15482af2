use axum::http::StatusCode;

/// Failure talking to the AnkiConnect endpoint.
#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("AnkiConnect request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("AnkiConnect error: {0}")]
    Upstream(String),
    #[error("AnkiConnect response had neither result nor error")]
    MissingResult,
}

/// Failure reading the on-disk snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure of a single refresh cycle. The snapshot is left as it was.
#[derive(Debug, thiserror::Error)]
pub enum RefreshError {
    #[error(transparent)]
    Fetch(#[from] DataSourceError),
    #[error("failed to write snapshot: {0}")]
    Write(#[from] std::io::Error),
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_gateway(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl From<DataSourceError> for AppError {
    fn from(err: DataSourceError) -> Self {
        Self::bad_gateway(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
