use std::{env, path::PathBuf, time::Duration};
use tracing::warn;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_ANKI_URL: &str = "http://localhost:8765";
pub const DEFAULT_CACHE_PATH: &str = "anki_data.json";
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 1000;

/// Process-wide settings, built once at startup and handed to each component.
#[derive(Debug, Clone)]
pub struct Config {
    pub anki_url: String,
    pub cache_path: PathBuf,
    pub port: u16,
    pub fetch_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            anki_url: DEFAULT_ANKI_URL.to_string(),
            cache_path: PathBuf::from(DEFAULT_CACHE_PATH),
            port: DEFAULT_PORT,
            fetch_timeout: Duration::from_millis(DEFAULT_FETCH_TIMEOUT_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = parse_or(lookup("PORT"), "PORT", defaults.port);
        let timeout_ms = parse_or(
            lookup("ANKI_FETCH_TIMEOUT_MS"),
            "ANKI_FETCH_TIMEOUT_MS",
            DEFAULT_FETCH_TIMEOUT_MS,
        );

        Self {
            anki_url: lookup("ANKI_CONNECT_URL").unwrap_or(defaults.anki_url),
            cache_path: lookup("ANKI_CACHE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.cache_path),
            port,
            fetch_timeout: Duration::from_millis(timeout_ms),
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy>(value: Option<String>, key: &str, default: T) -> T {
    match value {
        Some(raw) => match raw.trim().parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                warn!("ignoring invalid {key}={raw:?}");
                default
            }
        },
        None => default,
    }
}
