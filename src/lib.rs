//! FIX Trading Dashboard - Main Library
//!
//! Thin presentation layer over the `fix_dashboard` workspace crate.
//!
//! ## Architecture
//!
//! - **bin_common**: Common utilities for binary executables (config path resolution)
//! - **fix_dashboard**: Event pipeline, log channels, transport (re-exported from workspace)
//!
//! ## Usage in Binaries
//!
//! ```rust,no_run
//! use fix_terminal::bin_common::resolve_config_path;
//! use fix_terminal::fix_dashboard::DashboardConfig;
//!
//! let config = DashboardConfig::load(resolve_config_path(std::env::args().skip(1)));
//! ```

// Re-export workspace library for convenience
pub use fix_dashboard;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, resolve_config_path, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
}
