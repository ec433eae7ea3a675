//! Server endpoints derived from one base URL
//!
//! The channel lives on the same host as the command API, upgraded to the
//! WebSocket scheme: `http://host:8000` gives `ws://host:8000/ws` and
//! `http://host:8000/api/command`.

use url::Url;

use crate::infrastructure::DashboardError;
use crate::Result;

pub const CHANNEL_PATH: &str = "/ws";
pub const COMMAND_PATH: &str = "/api/command";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Duplex event channel (`ws://` or `wss://`)
    pub channel: Url,
    /// Command submission (`http://` or `https://`)
    pub command: Url,
}

impl Endpoints {
    pub fn from_base(base: &str) -> Result<Self> {
        let base = Url::parse(base)
            .map_err(|e| DashboardError::Endpoint(format!("'{}': {}", base, e)))?;

        let channel_scheme = match base.scheme() {
            "http" => "ws",
            "https" => "wss",
            other => {
                return Err(DashboardError::Endpoint(format!(
                    "unsupported scheme '{}', expected http or https",
                    other
                )))
            }
        };

        if base.host_str().is_none() {
            return Err(DashboardError::Endpoint(format!("'{}' has no host", base)));
        }

        let command = base
            .join(COMMAND_PATH)
            .map_err(|e| DashboardError::Endpoint(e.to_string()))?;

        let mut channel = base
            .join(CHANNEL_PATH)
            .map_err(|e| DashboardError::Endpoint(e.to_string()))?;
        channel.set_scheme(channel_scheme).map_err(|_| {
            DashboardError::Endpoint(format!("cannot switch '{}' to {}", base, channel_scheme))
        })?;

        Ok(Self { channel, command })
    }
}
