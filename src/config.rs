//! Network settings for discovery and bulb connections.

use std::net::Ipv4Addr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_with::{DurationMilliSeconds, serde_as};

/// UDP port WiZ bulbs listen on.
pub const BULB_PORT: u16 = 38899;

/// Settings for [`crate::search`].
///
/// Durations are given in milliseconds when (de)serialized.
///
/// ```
/// use std::time::Duration;
/// use wizard::SearchConfig;
///
/// let config: SearchConfig = serde_json::from_str(r#"{"broadcast": "10.0.0.255"}"#).unwrap();
/// assert_eq!(config.broadcast.to_string(), "10.0.0.255");
/// assert_eq!(config.timeout, Duration::from_secs(5));
/// ```
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Broadcast address of the subnet to search.
    pub broadcast: Ipv4Addr,
    pub port: u16,
    /// How long to collect replies.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            broadcast: Ipv4Addr::new(192, 168, 1, 255),
            port: BULB_PORT,
            timeout: Duration::from_secs(5),
        }
    }
}

/// Connection settings for a single [`crate::Bulb`].
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BulbConfig {
    pub port: u16,
    /// How long to wait for each reply.
    #[serde_as(as = "DurationMilliSeconds<u64>")]
    pub timeout: Duration,
    /// Back-off before each retry; its length is the retry count.
    #[serde_as(as = "Vec<DurationMilliSeconds<u64>>")]
    pub retry_delays: Vec<Duration>,
}

impl Default for BulbConfig {
    fn default() -> Self {
        BulbConfig {
            port: BULB_PORT,
            timeout: Duration::from_millis(1000),
            retry_delays: [750, 1500, 3000]
                .into_iter()
                .map(Duration::from_millis)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bulb_config_defaults() {
        let config = BulbConfig::default();
        assert_eq!(config.port, 38899);
        assert_eq!(config.retry_delays.len(), 3);
        assert_eq!(config.retry_delays[2], Duration::from_secs(3));
    }

    #[test]
    fn test_bulb_config_from_json() {
        let config: BulbConfig =
            serde_json::from_value(json!({"timeout": 250, "retry_delays": []})).unwrap();
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert!(config.retry_delays.is_empty());
        assert_eq!(config.port, BULB_PORT);
    }

    #[test]
    fn test_search_config_round_trip() {
        let config = SearchConfig {
            timeout: Duration::from_millis(1500),
            ..Default::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["timeout"], json!(1500));
        assert_eq!(value["broadcast"], json!("192.168.1.255"));
        let back: SearchConfig = serde_json::from_value(value).unwrap();
        assert_eq!(back, config);
    }
}
