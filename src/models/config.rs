//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client and politeness settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Output directory settings
    #[serde(default)]
    pub output: OutputConfig,

    /// Which extractors run for each team
    #[serde(default = "defaults::extractors")]
    pub extractors: Vec<ExtractorKind>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::config("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::config("http.timeout_secs must be > 0"));
        }
        if !self.http.base_url.starts_with("http") {
            return Err(AppError::config("http.base_url must be an http(s) URL"));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            output: OutputConfig::default(),
            extractors: defaults::extractors(),
        }
    }
}

/// HTTP client and politeness settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL of the statistics site
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Extra attempts after a failed request
    #[serde(default = "defaults::retries")]
    pub retries: u32,

    /// Delay between requests in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            retries: defaults::retries(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// Output directory settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for the per-team CSV trees
    #[serde(default = "defaults::data_dir")]
    pub data_dir: PathBuf,
}

impl OutputConfig {
    /// Directory holding one team's output files.
    pub fn team_dir(&self, team_name: &str) -> PathBuf {
        self.data_dir.join(team_name)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            data_dir: defaults::data_dir(),
        }
    }
}

/// An implemented extractor.
///
/// Split-stat and game-log extraction have no variant here; they are not
/// part of the pipeline rather than being silent no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractorKind {
    Records,
    Schedules,
    Rosters,
}

mod defaults {
    use std::path::PathBuf;

    use super::ExtractorKind;

    pub fn base_url() -> String {
        "http://www.cfbstats.com".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; cfbscrape/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn retries() -> u32 {
        2
    }
    pub fn request_delay() -> u64 {
        100
    }
    pub fn data_dir() -> PathBuf {
        PathBuf::from("Data/CFBStats")
    }
    pub fn extractors() -> Vec<ExtractorKind> {
        vec![
            ExtractorKind::Records,
            ExtractorKind::Schedules,
            ExtractorKind::Rosters,
        ]
    }
}
