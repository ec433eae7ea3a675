//! Routes decoded server events into the dashboard context
//!
//! Processing is strictly serial: one signal at a time, in arrival order.
//! Every effect is an append (or a quote overwrite); nothing is removed.
//! Malformed frames and unknown tags are logged and dropped so the next
//! frame is processed normally.

use tracing::{debug, warn};

use crate::domain::{
    ChannelLifecycle, ChannelName, Decoded, InboundEvent, LogEntry, QuoteExtractor,
};
use crate::infrastructure::{ChannelSignal, MarketDataMode};

use super::DashboardContext;

/// Where an event ended up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Channel(ChannelName),
    Quote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    Routed(Route),
    /// Well-formed frame with an unhandled `type`; dropped
    Unrecognized(String),
    /// Frame failed to decode; dropped
    Malformed,
    /// Open/close notification; `changed` if the badge flipped
    Lifecycle { changed: bool },
}

/// Counters for the footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchStats {
    pub routed: u64,
    pub malformed: u64,
    pub unrecognized: u64,
}

impl DispatchStats {
    pub fn dropped(&self) -> u64 {
        self.malformed + self.unrecognized
    }
}

#[derive(Debug, Default)]
pub struct EventDispatcher {
    stats: DispatchStats,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    /// Consume one transport signal
    pub fn handle_signal(
        &mut self,
        ctx: &mut DashboardContext,
        signal: ChannelSignal,
    ) -> DispatchOutcome {
        match signal {
            ChannelSignal::Opened => DispatchOutcome::Lifecycle {
                changed: ctx.connection_mut().apply(ChannelLifecycle::Opened),
            },
            ChannelSignal::Closed => DispatchOutcome::Lifecycle {
                changed: ctx.connection_mut().apply(ChannelLifecycle::Closed),
            },
            ChannelSignal::Frame(frame) => self.handle_frame(ctx, &frame),
        }
    }

    /// Decode and route one raw frame
    pub fn handle_frame(&mut self, ctx: &mut DashboardContext, frame: &str) -> DispatchOutcome {
        match InboundEvent::decode(frame) {
            Ok(Decoded::Event(event)) => DispatchOutcome::Routed(self.dispatch(ctx, event)),
            Ok(Decoded::Unrecognized(tag)) => {
                debug!("Dropping frame with unrecognized type '{}'", tag);
                self.stats.unrecognized += 1;
                DispatchOutcome::Unrecognized(tag)
            }
            Err(e) => {
                warn!("Dropping undecodable frame: {}", e);
                self.stats.malformed += 1;
                DispatchOutcome::Malformed
            }
        }
    }

    /// Route a decoded event; exactly one destination per event
    pub fn dispatch(&mut self, ctx: &mut DashboardContext, event: InboundEvent) -> Route {
        self.stats.routed += 1;

        match event {
            InboundEvent::MarketData { payload, .. } => match ctx.mode() {
                MarketDataMode::RawLog => {
                    ctx.channel_mut(ChannelName::MarketData)
                        .append(LogEntry::new(payload));
                    Route::Channel(ChannelName::MarketData)
                }
                MarketDataMode::ParsedQuotes => {
                    let update = QuoteExtractor::extract(&payload);
                    if !ctx.quote_mut().apply(update) {
                        debug!("Market data matched no quote pattern, keeping previous values");
                    }
                    Route::Quote
                }
            },
            InboundEvent::MakerOutput { message } => {
                ctx.channel_mut(ChannelName::Maker).append(LogEntry::new(message));
                Route::Channel(ChannelName::Maker)
            }
            InboundEvent::OrderUpdate { order } => {
                ctx.channel_mut(ChannelName::Orders).append(LogEntry::new(order));
                Route::Channel(ChannelName::Orders)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order_frame(order: &str) -> String {
        json!({ "type": "order_update", "order": order }).to_string()
    }

    fn texts(ctx: &DashboardContext, name: ChannelName) -> Vec<String> {
        ctx.channel(name)
            .entries()
            .iter()
            .map(|e| e.text().to_string())
            .collect()
    }

    #[test]
    fn test_order_updates_keep_count_order_and_text() {
        let mut ctx = DashboardContext::default();
        let mut dispatcher = EventDispatcher::new();
        let orders: Vec<String> = (0..50).map(|i| format!("35=8 | 11={} | 39=0", i)).collect();

        for order in &orders {
            let outcome = dispatcher.handle_frame(&mut ctx, &order_frame(order));
            assert_eq!(outcome, DispatchOutcome::Routed(Route::Channel(ChannelName::Orders)));
        }

        assert_eq!(texts(&ctx, ChannelName::Orders), orders);
        assert_eq!(dispatcher.stats().routed, 50);
    }

    #[test]
    fn test_channels_are_independent() {
        let mut ctx = DashboardContext::default();
        let mut dispatcher = EventDispatcher::new();

        dispatcher.handle_frame(&mut ctx, &order_frame("o1"));
        let orders_before = texts(&ctx, ChannelName::Orders);

        let maker = json!({"type": "maker_output", "message": "m1"}).to_string();
        let market = json!({"type": "market_data", "data": "d1"}).to_string();
        dispatcher.handle_frame(&mut ctx, &maker);
        dispatcher.handle_frame(&mut ctx, &market);

        assert_eq!(texts(&ctx, ChannelName::Orders), orders_before);
        assert_eq!(texts(&ctx, ChannelName::Maker), vec!["m1"]);
        assert_eq!(texts(&ctx, ChannelName::MarketData), vec!["d1"]);
    }

    #[test]
    fn test_decode_failure_does_not_block_next_frame() {
        let mut ctx = DashboardContext::default();
        let mut dispatcher = EventDispatcher::new();

        assert_eq!(dispatcher.handle_frame(&mut ctx, "{broken"), DispatchOutcome::Malformed);
        assert_eq!(
            dispatcher.handle_frame(&mut ctx, r#"{"type":"pnl","value":3}"#),
            DispatchOutcome::Unrecognized("pnl".into())
        );
        dispatcher.handle_frame(&mut ctx, &order_frame("after"));

        assert_eq!(texts(&ctx, ChannelName::Orders), vec!["after"]);
        assert_eq!(dispatcher.stats().dropped(), 2);
    }

    #[test]
    fn test_parsed_mode_updates_quote_not_log() {
        let mut ctx = DashboardContext::new(MarketDataMode::ParsedQuotes);
        let mut dispatcher = EventDispatcher::new();

        let outcome = dispatcher.handle_frame(
            &mut ctx,
            &json!({"type": "market_data", "data": "270=1|271=3.9500"}).to_string(),
        );
        assert_eq!(outcome, DispatchOutcome::Routed(Route::Quote));
        dispatcher.handle_frame(
            &mut ctx,
            &json!({"type": "market_data", "data": "270=2|271=3.9520"}).to_string(),
        );
        dispatcher.handle_frame(
            &mut ctx,
            &json!({"type": "market_data", "data": "35=0"}).to_string(),
        );

        assert!(ctx.channel(ChannelName::MarketData).is_empty());
        assert_eq!(ctx.quote().bid.as_deref(), Some("3.9500"));
        assert_eq!(ctx.quote().ask.as_deref(), Some("3.9520"));
    }

    #[test]
    fn test_lifecycle_signals_drive_badge() {
        let mut ctx = DashboardContext::default();
        let mut dispatcher = EventDispatcher::new();

        let outcomes: Vec<DispatchOutcome> = [
            ChannelSignal::Opened,
            ChannelSignal::Closed,
            ChannelSignal::Opened,
        ]
        .into_iter()
        .map(|signal| dispatcher.handle_signal(&mut ctx, signal))
        .collect();

        assert!(outcomes
            .iter()
            .all(|o| *o == DispatchOutcome::Lifecycle { changed: true }));
        assert!(ctx.connection().is_connected());
    }
}
