use anyhow::Result;
use excuse_gen::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validates a log level or filter directive such as `info` or `excuse_gen=debug`.
fn validate_log_level(level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(level).map_err(|_| {
        anyhow::anyhow!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match validate_log_level(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!("Starting excuse email generator with log level: {}", log_level);
    info!(
        "Environment: PORT={}, HOST={}",
        config.server.port, config.server.host
    );

    server::run(config).await?;

    Ok(())
}
