use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reviews completed on one day. Serialized as `["YYYY-MM-DD", count]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord(pub NaiveDate, pub u64);

impl ReviewRecord {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn count(&self) -> u64 {
        self.1
    }
}

pub type ReviewSeries = Vec<ReviewRecord>;

#[derive(Debug, Serialize)]
pub struct AnkiRequest<'a> {
    pub action: &'a str,
    pub version: u8,
}

#[derive(Debug, Deserialize)]
pub struct AnkiResponse<T> {
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}
