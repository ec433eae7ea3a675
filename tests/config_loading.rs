//! Integration test: Configuration utilities
//!
//! Tests config path resolution together with dashboard config loading.

use std::env;
use std::io::Write;

use fix_terminal::bin_common::{load_config_from_env, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use fix_terminal::fix_dashboard::{DashboardConfig, MarketDataMode, ReconnectPolicy};

// Environment is process-global; keep every env-touching assertion in one test
#[test]
fn test_config_path_env_and_default() {
    env::remove_var(CONFIG_PATH_ENV);
    assert_eq!(load_config_from_env().to_str().unwrap(), DEFAULT_CONFIG_PATH);

    env::set_var(CONFIG_PATH_ENV, "custom/dashboard.yaml");
    assert_eq!(
        load_config_from_env().to_str().unwrap(),
        "custom/dashboard.yaml"
    );
    env::remove_var(CONFIG_PATH_ENV);
}

#[test]
fn test_shipped_config_parses() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/dashboard.yaml");
    let yaml = std::fs::read_to_string(path).unwrap();
    let config: DashboardConfig = serde_yaml::from_str(&yaml).unwrap();

    assert_eq!(config.market_data_mode, MarketDataMode::RawLog);
    assert_eq!(config.reconnect, ReconnectPolicy::Never);
    assert_eq!(config.tick_ms, 50);
    config.validate().unwrap();
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "server_url: \"https://fix.example.com\"\nmarket_data_mode: parsed_quotes\ntick_ms: 20"
    )
    .unwrap();

    let config = DashboardConfig::load_with(file.path(), |_| None).unwrap();
    let endpoints = config.endpoints().unwrap();

    assert_eq!(config.market_data_mode, MarketDataMode::ParsedQuotes);
    assert_eq!(endpoints.channel.as_str(), "wss://fix.example.com/ws");
    assert_eq!(endpoints.command.as_str(), "https://fix.example.com/api/command");
}
