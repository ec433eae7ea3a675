//! Headline bid/ask extraction from FIX-like market data strings
//!
//! This is a substring heuristic, not a FIX decoder. `270=1` followed
//! anywhere later by `271=<number>` yields the bid; `270=2` followed by
//! `271=<number>` yields the ask. Intervening fields are skipped and no
//! delimiter boundary is checked.

use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

static BID_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)270=1.*?271=([0-9]+(?:\.[0-9]+)?)").expect("bid pattern is valid")
});

static ASK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)270=2.*?271=([0-9]+(?:\.[0-9]+)?)").expect("ask pattern is valid")
});

/// Bid/ask values as displayed; `None` means "never seen"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteSnapshot {
    pub bid: Option<String>,
    pub ask: Option<String>,
}

impl QuoteSnapshot {
    /// Overwrite only the fields present in `update`
    ///
    /// Returns true if anything matched.
    pub fn apply(&mut self, update: QuoteSnapshot) -> bool {
        let mut changed = false;
        if let Some(bid) = update.bid {
            self.bid = Some(bid);
            changed = true;
        }
        if let Some(ask) = update.ask {
            self.ask = Some(ask);
            changed = true;
        }
        changed
    }

    pub fn is_empty(&self) -> bool {
        self.bid.is_none() && self.ask.is_none()
    }

    /// `ask - bid` when both sides parse as decimals
    pub fn spread(&self) -> Option<Decimal> {
        let bid = Decimal::from_str(self.bid.as_deref()?).ok()?;
        let ask = Decimal::from_str(self.ask.as_deref()?).ok()?;
        Some(ask - bid)
    }
}

/// Stateless extractor over the two tag patterns
#[derive(Debug, Clone, Copy, Default)]
pub struct QuoteExtractor;

impl QuoteExtractor {
    /// Pull whichever of bid/ask the payload contains
    pub fn extract(payload: &str) -> QuoteSnapshot {
        QuoteSnapshot {
            bid: capture(&BID_PATTERN, payload),
            ask: capture(&ASK_PATTERN, payload),
        }
    }
}

fn capture(pattern: &Regex, payload: &str) -> Option<String> {
    pattern
        .captures(payload)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bid() {
        let quote = QuoteExtractor::extract("8=FIX.4.2|35=W|270=1|55=USD/BRL|271=3.9500|10=000");
        assert_eq!(quote.bid.as_deref(), Some("3.9500"));
        assert_eq!(quote.ask, None);
    }

    #[test]
    fn test_extract_ask() {
        let quote = QuoteExtractor::extract("35=W|270=2|271=3.9520|");
        assert_eq!(quote.ask.as_deref(), Some("3.9520"));
        assert_eq!(quote.bid, None);
    }

    #[test]
    fn test_extract_both_sides() {
        let quote = QuoteExtractor::extract("270=1 | 271=3.95 | 270=2 | 271=3.952");
        assert_eq!(quote.bid.as_deref(), Some("3.95"));
        assert_eq!(quote.ask.as_deref(), Some("3.952"));
    }

    #[test]
    fn test_match_crosses_soh_delimiters() {
        let payload = "270=1\u{1}269=0\u{1}271=4.01\u{1}";
        assert_eq!(QuoteExtractor::extract(payload).bid.as_deref(), Some("4.01"));
    }

    #[test]
    fn test_no_boundary_checking() {
        // 270=15 still starts with "270=1"; the heuristic accepts it
        let quote = QuoteExtractor::extract("270=15|999=x|271=7");
        assert_eq!(quote.bid.as_deref(), Some("7"));
    }

    #[test]
    fn test_non_match_retains_previous_values() {
        let mut shown = QuoteSnapshot::default();
        shown.apply(QuoteExtractor::extract("270=1|271=3.9500"));
        shown.apply(QuoteExtractor::extract("270=2|271=3.9520"));
        let before = shown.clone();

        let changed = shown.apply(QuoteExtractor::extract("35=0|58=heartbeat"));
        assert!(!changed);
        assert_eq!(shown, before);
        assert_eq!(shown.bid.as_deref(), Some("3.9500"));
        assert_eq!(shown.ask.as_deref(), Some("3.9520"));
    }

    #[test]
    fn test_spread() {
        let quote = QuoteSnapshot {
            bid: Some("3.9500".into()),
            ask: Some("3.9520".into()),
        };
        assert_eq!(quote.spread(), Some(Decimal::from_str("0.0020").unwrap()));
        assert_eq!(QuoteSnapshot::default().spread(), None);
    }
}
