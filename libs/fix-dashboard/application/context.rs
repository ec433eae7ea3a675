//! Application context: every piece of view state, owned in one place
//!
//! Constructed once at startup and handed to the dispatcher and the UI.
//! Nothing here is shared across threads; the single consumer loop is the
//! only writer.

use crate::domain::{ChannelName, ConnectionIndicator, LogChannel, QuoteSnapshot};
use crate::infrastructure::MarketDataMode;

#[derive(Debug, Clone)]
pub struct DashboardContext {
    orders: LogChannel,
    maker: LogChannel,
    market_data: LogChannel,
    quote: QuoteSnapshot,
    connection: ConnectionIndicator,
    mode: MarketDataMode,
}

impl DashboardContext {
    pub fn new(mode: MarketDataMode) -> Self {
        Self {
            orders: LogChannel::new(ChannelName::Orders),
            maker: LogChannel::new(ChannelName::Maker),
            market_data: LogChannel::new(ChannelName::MarketData),
            quote: QuoteSnapshot::default(),
            connection: ConnectionIndicator::new(),
            mode,
        }
    }

    pub fn mode(&self) -> MarketDataMode {
        self.mode
    }

    pub fn channel(&self, name: ChannelName) -> &LogChannel {
        match name {
            ChannelName::Orders => &self.orders,
            ChannelName::Maker => &self.maker,
            ChannelName::MarketData => &self.market_data,
        }
    }

    pub fn channel_mut(&mut self, name: ChannelName) -> &mut LogChannel {
        match name {
            ChannelName::Orders => &mut self.orders,
            ChannelName::Maker => &mut self.maker,
            ChannelName::MarketData => &mut self.market_data,
        }
    }

    pub fn quote(&self) -> &QuoteSnapshot {
        &self.quote
    }

    pub fn quote_mut(&mut self) -> &mut QuoteSnapshot {
        &mut self.quote
    }

    pub fn connection(&self) -> &ConnectionIndicator {
        &self.connection
    }

    pub fn connection_mut(&mut self) -> &mut ConnectionIndicator {
        &mut self.connection
    }
}

impl Default for DashboardContext {
    fn default() -> Self {
        Self::new(MarketDataMode::default())
    }
}
