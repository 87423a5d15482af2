use anki_heatmap::{refresh::run_once, Config};
use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    match run_once(&config).await {
        Ok(days) => {
            info!(
                "Anki data updated successfully at {} ({days} days -> {})",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                config.cache_path.display()
            );
            Ok(())
        }
        Err(err) => {
            error!("error updating Anki data: {err}");
            Err(err.into())
        }
    }
}
