use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for yt2gh
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// GitHub API connection settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Rate-limit throttle policy
    #[serde(default)]
    pub throttle: ThrottleConfig,

    /// Batch pacing
    #[serde(default)]
    pub migration: MigrationConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LogConfig,
}

/// GitHub REST API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GitHubConfig {
    /// Base URL of the REST API, without trailing slash
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Value sent in `X-GitHub-Api-Version`
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Value sent in `User-Agent`; GitHub rejects requests without one
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_api_version() -> String {
    "2022-11-28".to_string()
}

fn default_user_agent() -> String {
    "yt2gh".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_version: default_api_version(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// When to stop and wait for the rate-limit window to reset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ThrottleConfig {
    /// Wait for the reset once `X-Ratelimit-Remaining` drops below this
    #[serde(default = "default_remaining_threshold")]
    pub remaining_threshold: i64,
}

const fn default_remaining_threshold() -> i64 {
    5
}

impl Default for ThrottleConfig {
    fn default() -> Self {
        Self {
            remaining_threshold: default_remaining_threshold(),
        }
    }
}

/// Batch pacing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MigrationConfig {
    /// Pause between two consecutive issue creations, in seconds
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,
}

const fn default_cooldown_secs() -> u64 {
    2
}

impl Default for MigrationConfig {
    fn default() -> Self {
        Self {
            cooldown_secs: default_cooldown_secs(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Console output format (json, pretty)
    #[serde(default = "default_format")]
    pub format: LogFormat,

    /// Directory for log files (optional, if None logs only to stderr)
    pub log_dir: Option<PathBuf>,

    /// Log rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    #[default]
    Daily,
    Hourly,
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

const fn default_format() -> LogFormat {
    LogFormat::Pretty
}
