//! Dashboard configuration
//!
//! Loaded from YAML with every field optional, then overridden from the
//! environment (`.env` is honoured by the binary through `dotenv`).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use super::channel::ReconnectPolicy;
use super::endpoint::Endpoints;

pub const SERVER_URL_ENV: &str = "FIX_DASHBOARD_SERVER_URL";
pub const MARKET_DATA_MODE_ENV: &str = "FIX_DASHBOARD_MARKET_DATA_MODE";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// How market data frames are presented; exactly one is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketDataMode {
    /// Append every payload to the market data log
    #[default]
    RawLog,
    /// Extract bid/ask into the headline quote
    ParsedQuotes,
}

impl std::str::FromStr for MarketDataMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raw_log" | "raw" => Ok(MarketDataMode::RawLog),
            "parsed_quotes" | "parsed" => Ok(MarketDataMode::ParsedQuotes),
            other => Err(ConfigError::ValidationError(format!(
                "unknown market data mode '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Base URL of the session server; channel and command endpoints derive from it
    pub server_url: String,
    pub market_data_mode: MarketDataMode,
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    pub log_file: PathBuf,
    pub reconnect: ReconnectPolicy,
    /// UI input poll interval
    pub tick_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8000".to_string(),
            market_data_mode: MarketDataMode::default(),
            log_level: "info".to_string(),
            log_file: PathBuf::from("fix_dashboard.log"),
            reconnect: ReconnectPolicy::default(),
            tick_ms: 50,
        }
    }
}

impl DashboardConfig {
    /// Load from YAML (defaults if the file is absent), apply env overrides, validate
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`DashboardConfig::load`] with overrides taken from `lookup`
    pub fn load_with<F>(config_path: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = config_path.as_ref();
        let mut config = if path.exists() {
            let yaml_content = std::fs::read_to_string(path)?;
            serde_yaml::from_str::<DashboardConfig>(&yaml_content)?
        } else {
            info!("No config at {}, using defaults", path.display());
            DashboardConfig::default()
        };

        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the environment in production)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(SERVER_URL_ENV) {
            self.server_url = url;
        }
        if let Some(mode) = lookup(MARKET_DATA_MODE_ENV) {
            self.market_data_mode = mode.parse()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.tick_ms == 0 {
            return Err(ConfigError::ValidationError(
                "tick_ms must be greater than zero".into(),
            ));
        }
        self.endpoints()?;
        Ok(())
    }

    pub fn endpoints(&self) -> Result<Endpoints> {
        Endpoints::from_base(&self.server_url)
            .map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    pub fn tick(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_ms)
    }
}
