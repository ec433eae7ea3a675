//! # FIX Dashboard
//!
//! Client-side streaming pipeline for a live FIX trading session.
//!
//! A single duplex channel (WebSocket) pushes tagged JSON frames from the
//! session server. Each frame is decoded once into an [`InboundEvent`] and
//! routed into one of three append-only log channels (order history, market
//! maker output, market data) or, in parsed-quote mode, into the headline
//! bid/ask snapshot. Terminal commands go back to the server as
//! fire-and-forget HTTP requests.
//!
//! ## Architecture
//!
//! ```text
//! WebSocket task ──ChannelSignal──> crossbeam channel ──> UI loop
//!                                                          │
//!                                   EventDispatcher ◄──────┘
//!                                    │      │      │
//!                               orders   maker   marketdata / QuoteSnapshot
//! ```
//!
//! - **domain**: events, log channels, quote extraction, connection badge
//! - **application**: dispatcher, command emitter, TUI state and widgets
//! - **infrastructure**: WebSocket client, HTTP command sink, config, logging

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    App, CommandEmitter, CommandSink, DashboardContext, DispatchOutcome, DispatchStats,
    EventDispatcher, Focus, Route,
};
pub use domain::{
    ChannelLifecycle, ChannelName, ConnectionIndicator, ConnectionState, Decoded, DisplayTime,
    InboundEvent, LogChannel, LogEntry, LogView, QuoteExtractor, QuoteSnapshot,
};
pub use infrastructure::{
    ChannelClient, ChannelHandle, ChannelSignal, CommandRequest, ConfigError, DashboardConfig,
    DashboardError, Endpoints, HttpCommandSink, MarketDataMode, ReconnectPolicy,
};

/// Type alias for Result with DashboardError
pub type Result<T> = std::result::Result<T, DashboardError>;
