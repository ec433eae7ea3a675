//! CLI utilities for binaries
//!
//! Resolves which configuration file the dashboard loads.

use std::path::PathBuf;

/// Environment variable naming the config file
pub const CONFIG_PATH_ENV: &str = "FIX_DASHBOARD_CONFIG";

/// Used when neither an argument nor the environment names a file
pub const DEFAULT_CONFIG_PATH: &str = "config/dashboard.yaml";

/// Load configuration path from environment or use default
pub fn load_config_from_env() -> PathBuf {
    config_path_from(|key| std::env::var(key).ok())
}

/// First positional argument wins over the environment
///
/// # Examples
/// ```
/// use fix_terminal::bin_common::resolve_config_path;
///
/// let path = resolve_config_path(vec!["custom.yaml".to_string()]);
/// assert_eq!(path.to_str(), Some("custom.yaml"));
/// ```
pub fn resolve_config_path<I>(args: I) -> PathBuf
where
    I: IntoIterator<Item = String>,
{
    match args.into_iter().next() {
        Some(path) => PathBuf::from(path),
        None => load_config_from_env(),
    }
}

fn config_path_from<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    lookup(CONFIG_PATH_ENV)
        .filter(|path| !path.is_empty())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
        .into()
}
