//! Duplex event channel (WebSocket) client
//!
//! One tokio task owns the socket and forwards lifecycle notifications and
//! text frames, in transport order, over an unbounded crossbeam channel to a
//! single consumer.

pub mod client;
pub mod reconnect;

pub use client::{ChannelClient, ChannelHandle, ChannelSignal};
pub use reconnect::ReconnectPolicy;
