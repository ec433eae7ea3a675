use thiserror::Error;

/// Main error type for the dashboard core
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Inbound frame could not be decoded into an event
    #[error("Decode error: {0}")]
    Decode(String),

    /// WebSocket transport error
    #[error("WebSocket error: {0}")]
    WebSocket(String),

    /// Endpoint could not be derived from the server URL
    #[error("Invalid endpoint: {0}")]
    Endpoint(String),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] super::config::ConfigError),

    /// Terminal I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Logging could not be initialized
    #[error("Logging error: {0}")]
    Logging(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(e: serde_json::Error) -> Self {
        DashboardError::Decode(e.to_string())
    }
}
