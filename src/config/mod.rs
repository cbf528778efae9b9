mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const WEATHER_API_KEY: &str = "WEATHER_API_KEY";
pub const OPENTRIPMAP_API_KEY: &str = "OPENTRIPMAP_API_KEY";

/// Loads `.env`, the optional YAML file at `CONFIG_PATH` and the credential
/// variables, then validates the result.
pub async fn load() -> Result<Config> {
    // A missing .env is fine; the variables may come from the real environment.
    let _ = dotenvy::dotenv();

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    load_from(&config_path, |key| env::var(key).ok()).await
}

/// Same as [`load`] with an explicit file path and variable lookup.
pub async fn load_from<F>(config_path: &str, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = load_file(config_path).await?;

    config.apply_env_overrides(lookup);
    config.validate()?;

    Ok(config)
}

async fn load_file(config_path: &str) -> Result<Config> {
    if !Path::new(config_path).exists() {
        debug!("No configuration file at {}, using defaults", config_path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

impl Config {
    /// Overrides credentials with values from `lookup` (normally the process
    /// environment). Empty values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(key) = get(OPENAI_API_KEY) {
            self.llm.api_key = key;
        }
        if let Some(key) = get(WEATHER_API_KEY) {
            self.weather.api_key = key;
        }
        if let Some(key) = get(OPENTRIPMAP_API_KEY) {
            self.places.api_key = key;
        }
    }

    /// All three credentials are mandatory.
    pub fn validate(&self) -> Result<()> {
        let credentials = [
            (OPENAI_API_KEY, &self.llm.api_key),
            (WEATHER_API_KEY, &self.weather.api_key),
            (OPENTRIPMAP_API_KEY, &self.places.api_key),
        ];

        for (name, value) in credentials {
            if value.trim().is_empty() {
                return Err(Error::config(format!("{} is not set", name)));
            }
        }

        if self.places.limit == 0 {
            return Err(Error::config("places.limit must be greater than zero"));
        }

        Ok(())
    }
}
