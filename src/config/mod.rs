mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `.env`, the YAML file and the process environment,
/// then validates it.
pub async fn load() -> Result<Config> {
    env_file_loaded(dotenvy::dotenv())?;

    let explicit_path = env::var("CONFIG_PATH").ok();
    let config_path = explicit_path
        .clone()
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let config = if explicit_path.is_some() || Path::new(&config_path).exists() {
        debug!("Loading configuration from: {}", config_path);
        load_from_path(&config_path).await?
    } else {
        debug!("No configuration file found, using defaults");
        Config::default()
    };

    let config = apply_env_overrides(config, |key| env::var(key).ok());
    config.validate()?;

    Ok(config)
}

/// A missing `.env` is fine; one that exists but cannot be read or parsed is not.
fn env_file_loaded<T>(result: dotenvy::Result<T>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => {
            debug!("No .env file found");
            Ok(())
        }
        Err(e) => Err(Error::config(format!("Failed to load .env file: {}", e))),
    }
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;
    Ok(config)
}

/// Overlays `OPENAI_API_KEY`, `OPENAI_BASE_URL` and `OPENAI_MODEL` onto the
/// file configuration. Empty values are ignored.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(api_key) = non_empty("OPENAI_API_KEY") {
        config.llm.api_key = api_key;
    }
    if let Some(base_url) = non_empty("OPENAI_BASE_URL") {
        config.llm.base_url = base_url;
    }
    if let Some(model) = non_empty("OPENAI_MODEL") {
        config.llm.model = model;
    }

    config
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.llm.provider != "openai" {
            return Err(Error::config(format!(
                "Unsupported LLM provider: '{}'",
                self.llm.provider
            )));
        }
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(
                "No completion service API key: set OPENAI_API_KEY or llm.api_key",
            ));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        Ok(())
    }
}
