//! Inbound events pushed by the session server
//!
//! Every frame on the duplex channel is a JSON object tagged by `type`:
//!
//! | type           | payload field     |
//! |----------------|-------------------|
//! | `market_data`  | `data` (+ `prefix`) |
//! | `maker_output` | `message`         |
//! | `order_update` | `order`           |
//!
//! The tag is resolved once here, so downstream routing is an exhaustive
//! `match` and an unknown tag is its own branch instead of a fallthrough.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::infrastructure::DashboardError;
use crate::Result;

/// Tags understood by the dashboard
const KNOWN_TAGS: [&str; 3] = ["market_data", "maker_output", "order_update"];

/// A decoded server-pushed event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InboundEvent {
    /// Raw FIX-like market data string
    MarketData {
        #[serde(rename = "data")]
        payload: String,
        /// Session prefix the server attaches (e.g. `MD`); not displayed
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prefix: Option<String>,
    },
    /// Market maker diagnostic line
    MakerOutput { message: String },
    /// Order acknowledgement / execution report
    OrderUpdate { order: String },
}

/// Result of decoding one well-formed frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Event(InboundEvent),
    /// Valid JSON with a `type` the dashboard does not handle
    Unrecognized(String),
}

impl InboundEvent {
    /// Decode one inbound text frame
    ///
    /// # Errors
    /// `DashboardError::Decode` if the frame is not JSON, has no string
    /// `type`, or a known tag is missing its payload field.
    pub fn decode(frame: &str) -> Result<Decoded> {
        let value: Value = serde_json::from_str(frame)?;

        let tag = match value.get("type") {
            Some(Value::String(tag)) => tag.clone(),
            Some(other) => {
                return Err(DashboardError::Decode(format!(
                    "`type` must be a string, got {}",
                    other
                )))
            }
            None => return Err(DashboardError::Decode("missing `type` tag".into())),
        };

        if !KNOWN_TAGS.contains(&tag.as_str()) {
            return Ok(Decoded::Unrecognized(tag));
        }

        let event: InboundEvent = serde_json::from_value(value)?;
        Ok(Decoded::Event(event))
    }

    /// Wire tag of this event
    pub fn tag(&self) -> &'static str {
        match self {
            InboundEvent::MarketData { .. } => "market_data",
            InboundEvent::MakerOutput { .. } => "maker_output",
            InboundEvent::OrderUpdate { .. } => "order_update",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_order_update() {
        let decoded =
            InboundEvent::decode(r#"{"type":"order_update","order":"35=8 | 11=1 | 39=0"}"#)
                .unwrap();
        assert_eq!(
            decoded,
            Decoded::Event(InboundEvent::OrderUpdate {
                order: "35=8 | 11=1 | 39=0".to_string()
            })
        );
    }

    #[test]
    fn test_decode_market_data_with_prefix() {
        let decoded = InboundEvent::decode(
            r#"{"type":"market_data","data":"270=1|271=3.95","prefix":"MD"}"#,
        )
        .unwrap();
        match decoded {
            Decoded::Event(InboundEvent::MarketData { payload, prefix }) => {
                assert_eq!(payload, "270=1|271=3.95");
                assert_eq!(prefix.as_deref(), Some("MD"));
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_decode_market_data_null_prefix() {
        let decoded =
            InboundEvent::decode(r#"{"type":"market_data","data":"x","prefix":null}"#).unwrap();
        assert!(matches!(
            decoded,
            Decoded::Event(InboundEvent::MarketData { prefix: None, .. })
        ));
    }

    #[test]
    fn test_unknown_tag_is_explicit() {
        let decoded = InboundEvent::decode(r#"{"type":"heartbeat","n":1}"#).unwrap();
        assert_eq!(decoded, Decoded::Unrecognized("heartbeat".to_string()));
    }

    #[test]
    fn test_malformed_frames_fail_decode() {
        assert!(InboundEvent::decode("not json").is_err());
        assert!(InboundEvent::decode(r#"{"order":"x"}"#).is_err());
        assert!(InboundEvent::decode(r#"{"type":7}"#).is_err());
        assert!(InboundEvent::decode(r#"{"type":"maker_output"}"#).is_err());
        assert!(InboundEvent::decode(r#"{"type":"market_data","data":{"bid":1}}"#).is_err());
        assert!(InboundEvent::decode("[1,2,3]").is_err());
    }

    #[test]
    fn test_tag_matches_wire_name() {
        let event = InboundEvent::MakerOutput {
            message: "quote sent".into(),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], event.tag());
        assert_eq!(json["message"], "quote sent");
    }
}
