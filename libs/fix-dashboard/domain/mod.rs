//! Domain layer: events, log channels, quotes, connection state

pub mod connection;
pub mod event;
pub mod log;
pub mod quote;

pub use connection::{ChannelLifecycle, ConnectionIndicator, ConnectionState};
pub use event::{Decoded, InboundEvent};
pub use log::{ChannelName, DisplayTime, LogChannel, LogEntry, LogView};
pub use quote::{QuoteExtractor, QuoteSnapshot};
