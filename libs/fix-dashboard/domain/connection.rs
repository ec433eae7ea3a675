//! Two-state connection badge

use std::fmt;

/// Connection state shown in the header badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    Connected,
    #[default]
    Disconnected,
}

impl ConnectionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Connected => "Connected",
            ConnectionState::Disconnected => "Disconnected",
        }
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel lifecycle notification from the transport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLifecycle {
    Opened,
    /// Orderly close or network failure
    Closed,
}

/// Badge state machine; driven only by lifecycle notifications
#[derive(Debug, Clone, Default)]
pub struct ConnectionIndicator {
    state: ConnectionState,
    transitions: u64,
}

impl ConnectionIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    /// Number of visible state changes so far
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    /// Apply a notification; returns whether the badge changed
    pub fn apply(&mut self, event: ChannelLifecycle) -> bool {
        let next = match event {
            ChannelLifecycle::Opened => ConnectionState::Connected,
            ChannelLifecycle::Closed => ConnectionState::Disconnected,
        };
        if next == self.state {
            return false;
        }
        self.state = next;
        self.transitions += 1;
        true
    }
}
