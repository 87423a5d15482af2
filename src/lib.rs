pub mod anki;
pub mod app;
pub mod cleaner;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod heatmap;
pub mod models;
pub mod refresh;
pub mod state;
pub mod storage;
pub mod ui;

#[cfg(test)]
mod testing;

pub use app::router;
pub use config::Config;
pub use state::AppState;
