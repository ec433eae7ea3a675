//! Logging initialization
//!
//! The TUI owns the terminal, so log lines go to a file instead of stdout.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::infrastructure::DashboardError;
use crate::Result;

/// Initialize tracing into `log_file`; `RUST_LOG` overrides `level`
pub fn init_tracing(level: &str, log_file: impl AsRef<Path>) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file.as_ref())?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_line_number(false)
        .try_init()
        .map_err(|e| DashboardError::Logging(e.to_string()))
}
