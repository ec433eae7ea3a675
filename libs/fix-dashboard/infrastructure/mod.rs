//! Infrastructure layer: transport, HTTP, configuration, logging

pub mod channel;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod http_sink;
pub mod logging;

pub use channel::{ChannelClient, ChannelHandle, ChannelSignal, ReconnectPolicy};
pub use config::{ConfigError, DashboardConfig, MarketDataMode};
pub use endpoint::Endpoints;
pub use error::DashboardError;
pub use http_sink::{CommandRequest, HttpCommandSink};
pub use logging::init_tracing;
