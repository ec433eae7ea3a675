use std::time::Duration;

use serde::{Deserialize, Serialize};

/// What the channel client does after the socket closes
///
/// The dashboard itself never reconnects; the default is `Never`, which
/// leaves the badge on "Disconnected" until restart. The other policies
/// exist for deployments that want the transport to retry on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReconnectPolicy {
    #[default]
    Never,
    /// Same delay before every attempt
    Fixed { delay_ms: u64 },
    /// `initial_ms * 2^attempt`, capped at `max_ms`
    Backoff { initial_ms: u64, max_ms: u64 },
}

impl ReconnectPolicy {
    /// Delay before reconnection attempt `attempt` (0-indexed), or `None` to stop
    pub fn next_delay(&self, attempt: usize) -> Option<Duration> {
        match *self {
            ReconnectPolicy::Never => None,
            ReconnectPolicy::Fixed { delay_ms } => Some(Duration::from_millis(delay_ms)),
            ReconnectPolicy::Backoff { initial_ms, max_ms } => {
                let factor = 2u64.saturating_pow(attempt.min(u32::MAX as usize) as u32);
                Some(Duration::from_millis(initial_ms.saturating_mul(factor).min(max_ms)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_stops_immediately() {
        assert_eq!(ReconnectPolicy::Never.next_delay(0), None);
        assert_eq!(ReconnectPolicy::default(), ReconnectPolicy::Never);
    }

    #[test]
    fn test_fixed_delay() {
        let policy = ReconnectPolicy::Fixed { delay_ms: 250 };
        assert_eq!(policy.next_delay(0), Some(Duration::from_millis(250)));
        assert_eq!(policy.next_delay(9), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_backoff_is_capped() {
        let policy = ReconnectPolicy::Backoff {
            initial_ms: 100,
            max_ms: 1_000,
        };
        assert_eq!(policy.next_delay(0), Some(Duration::from_millis(100)));
        assert_eq!(policy.next_delay(2), Some(Duration::from_millis(400)));
        assert_eq!(policy.next_delay(10), Some(Duration::from_millis(1_000)));
        assert_eq!(policy.next_delay(200), Some(Duration::from_millis(1_000)));
    }

    #[test]
    fn test_yaml_shape() {
        let policy: ReconnectPolicy =
            serde_yaml::from_str("kind: backoff\ninitial_ms: 500\nmax_ms: 8000\n").unwrap();
        assert_eq!(
            policy,
            ReconnectPolicy::Backoff {
                initial_ms: 500,
                max_ms: 8_000
            }
        );
    }
}
