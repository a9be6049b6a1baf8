use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Project-local configuration file, merged when present.
pub const DEFAULT_CONFIG_PATH: &str = ".yt2gh/config.yaml";

/// Prefix of environment variable overrides, e.g. `YT2GH_GITHUB__TIMEOUT_SECS`.
pub const ENV_PREFIX: &str = "YT2GH_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Invalid api_base_url '{0}': {1}")]
    InvalidBaseUrl(String, String),

    #[error("Invalid timeout_secs: {0}. Must be at least 1")]
    InvalidTimeout(u64),

    #[error("Invalid remaining_threshold: {0}. Must be at least 1")]
    InvalidThreshold(i64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `path` if given (must exist), otherwise `.yt2gh/config.yaml` if present
    /// 3. Environment variables (`YT2GH_*` prefix, `__` between nested keys)
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let file = match path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::MissingFile(path.to_path_buf()).into());
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(DEFAULT_CONFIG_PATH),
        };

        let config: Config = Self::figment(&file)
            .extract()
            .with_context(|| format!("Failed to load config from {}", file.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(file: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let base_url = &config.github.api_base_url;
        let parsed = reqwest::Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidBaseUrl(base_url.clone(), e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(
                base_url.clone(),
                format!("unsupported scheme '{}'", parsed.scheme()),
            ));
        }

        if config.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.github.timeout_secs));
        }

        if config.github.user_agent.trim().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "github.user_agent cannot be empty".to_string(),
            ));
        }

        if config.throttle.remaining_threshold < 1 {
            return Err(ConfigError::InvalidThreshold(
                config.throttle.remaining_threshold,
            ));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        Ok(())
    }
}
