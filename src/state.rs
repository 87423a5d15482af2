use crate::anki::AnkiClient;
use crate::config::Config;
use std::{path::PathBuf, sync::Arc};

/// Shared per-process handles. Nothing in here is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    pub cache_path: Arc<PathBuf>,
    pub anki: AnkiClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            cache_path: Arc::new(config.cache_path.clone()),
            anki: AnkiClient::new(config),
        }
    }
}
