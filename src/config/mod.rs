mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from an optional YAML file, then applies environment overrides.
///
/// A missing `config.yaml` is fine; a missing file named explicitly through
/// `CONFIG_PATH` is not.
pub async fn load() -> Result<Config> {
    // Ignore a missing .env; every value has a default or an env override.
    let _ = dotenvy::dotenv();

    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let mut config = if explicit_path.is_some() || Path::new(&config_path).exists() {
        debug!("Loading configuration from: {}", config_path);
        let config_str = tokio::fs::read_to_string(&config_path).await?;
        from_yaml(&config_str)?
    } else {
        debug!("No configuration file found, using defaults");
        Config::default()
    };

    config.apply_overrides(|key| env::var(key).ok())?;

    Ok(config)
}

pub fn from_yaml(contents: &str) -> Result<Config> {
    if contents.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(contents)?)
}

impl Config {
    /// Overlays values from `lookup`, which maps an environment variable name to its value.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(token) = lookup("DATABRICKS_API_TOKEN") {
            self.llm.api_token = Some(token);
        }
        if let Some(url) = lookup("DATABRICKS_ENDPOINT_URL") {
            self.llm.endpoint_url = url;
        }
        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECS") {
            self.llm.timeout_secs = secs.trim().parse().map_err(|_| {
                Error::config(format!("REQUEST_TIMEOUT_SECS must be an integer, got '{secs}'"))
            })?;
        }
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| Error::config(format!("PORT must be a valid port, got '{port}'")))?;
        }
        if let Some(dir) = lookup("PUBLIC_DIR") {
            self.server.public_dir = Some(dir);
        }
        if let Some(level) = lookup("LOG_LEVEL") {
            self.server.logs.level = level;
        }

        if self.llm.api_token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.llm.api_token = None;
        }
        if self.llm.endpoint_url.trim().is_empty() {
            return Err(Error::config("Inference endpoint URL must not be empty"));
        }
        if self.llm.timeout_secs == 0 {
            return Err(Error::config("Request timeout must be greater than zero"));
        }

        Ok(())
    }
}
