mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";
pub const CONFIG_PATH_ENV: &str = "CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH` (or `config.yaml`) and the environment.
///
/// A file named through `CONFIG_PATH` must exist. The default file is optional,
/// built-in defaults apply when it is absent. The API key always comes from
/// `OPENROUTER_API_KEY` when that is set, and loading fails if no key is found.
pub async fn load() -> Result<Config> {
    let api_key = env::var(API_KEY_ENV).ok();

    match env::var(CONFIG_PATH_ENV) {
        Ok(path) => load_file(Path::new(&path), api_key).await,
        Err(_) => {
            let path = Path::new(DEFAULT_CONFIG_PATH);
            match tokio::fs::read_to_string(path).await {
                Ok(yaml) => {
                    debug!("Loading configuration from: {}", path.display());
                    Config::from_sources(Some(&yaml), api_key)
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_PATH);
                    Config::from_sources(None, api_key)
                }
                Err(e) => Err(e.into()),
            }
        }
    }
}

/// Loads configuration from an explicit YAML file, merging in the given API key.
pub async fn load_file(path: &Path, api_key: Option<String>) -> Result<Config> {
    debug!("Loading configuration from: {}", path.display());

    let yaml = tokio::fs::read_to_string(path).await?;
    Config::from_sources(Some(&yaml), api_key)
}

impl Config {
    /// Builds a validated config from optional YAML text and an optional API key.
    /// A non-blank `api_key` overrides whatever the YAML holds.
    pub fn from_sources(yaml: Option<&str>, api_key: Option<String>) -> Result<Self> {
        let mut config: Config = match yaml {
            Some(yaml) => serde_yaml::from_str(yaml)?,
            None => Config::default(),
        };

        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            config.llm.api_key = key;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(format!(
                "{} is missing; set it in the environment or in llm.api_key",
                API_KEY_ENV
            )));
        }

        if self.llm.max_tokens == 0 {
            return Err(Error::config("llm.max_tokens must be greater than zero"));
        }

        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(Error::config(format!(
                "llm.temperature must be between 0.0 and 2.0, got {}",
                self.llm.temperature
            )));
        }

        if self.llm.timeout_secs == 0 {
            return Err(Error::config("llm.timeout_secs must be greater than zero"));
        }

        if self.server.cors.allowed_origins.is_empty() {
            return Err(Error::config(
                "server.cors.allowed_origins must list at least one origin",
            ));
        }

        Ok(())
    }
}
