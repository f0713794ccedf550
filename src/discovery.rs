//! Device discovery via UDP broadcast.

use std::collections::HashMap;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use log::{debug, warn};
use serde_json::{Value, json};
use tokio::net::UdpSocket;
use tokio::time::Instant;

use crate::config::{BulbConfig, SearchConfig};
use crate::device::Bulb;
use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// A WiZ bulb that answered a discovery broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredBulb {
    /// IP address of the discovered bulb
    pub ip: Ipv4Addr,
    /// MAC address of the discovered bulb
    pub mac: String,
}

impl DiscoveredBulb {
    /// Convert this discovered bulb into a [`Bulb`] handle.
    pub fn into_bulb(self, config: BulbConfig) -> Bulb {
        Bulb::new(self.ip, Some(&self.mac)).with_config(config)
    }
}

/// Broadcast a registration request and collect the bulbs that answer.
///
/// Replies are gathered until `config.timeout` elapses, deduplicated by MAC
/// and returned sorted by IP address.
///
/// # Examples
///
/// ```ignore
/// use wizard::{SearchConfig, discover_bulbs};
///
/// let bulbs = discover_bulbs(&SearchConfig::default()).await?;
/// for bulb in bulbs {
///     println!("  {} - {}", bulb.ip, bulb.mac);
/// }
/// ```
pub async fn discover_bulbs(config: &SearchConfig) -> Result<Vec<DiscoveredBulb>> {
    let socket = UdpSocket::bind("0.0.0.0:0")
        .await
        .map_err(|e| Error::socket("bind", e))?;

    socket
        .set_broadcast(true)
        .map_err(|e| Error::socket("set_broadcast", e))?;

    let msg = json!({
        "method": "registration",
        "params": {
            "phoneMac": "AAAAAAAAAAAA",
            "register": false,
            "phoneIp": "1.2.3.4",
            "id": "1"
        }
    });
    let msg_bytes = serde_json::to_vec(&msg).map_err(Error::JsonDump)?;

    socket
        .send_to(&msg_bytes, (config.broadcast, config.port))
        .await
        .map_err(|e| Error::socket("send_to", e))?;

    let mut discovered: HashMap<String, DiscoveredBulb> = HashMap::new();
    let start = Instant::now();
    let mut buffer = [0u8; 4096];
    let recv_timeout = Duration::from_millis(500);

    while start.elapsed() < config.timeout {
        let wait = recv_timeout.min(config.timeout.saturating_sub(start.elapsed()));
        match tokio::time::timeout(wait, socket.recv_from(&mut buffer)).await {
            Ok(Ok((size, addr))) => {
                if let Ok(response) = String::from_utf8(buffer[..size].to_vec())
                    && let Ok(json) = serde_json::from_str::<Value>(&response)
                    && let Some(mac) = extract_mac(&json)
                {
                    let SocketAddr::V4(v4) = addr else { continue };
                    debug!("discovered {} at {}", mac, v4.ip());
                    discovered.insert(mac.clone(), DiscoveredBulb { ip: *v4.ip(), mac });
                }
            }
            // A failed read ends neither the search nor the bulbs found so far
            Ok(Err(e)) => warn!("discovery receive error: {}", e),
            // Per-read timeout; the loop condition checks the overall window
            Err(_) => continue,
        }
    }

    let mut bulbs: Vec<DiscoveredBulb> = discovered.into_values().collect();
    bulbs.sort_by_key(|b| b.ip);
    Ok(bulbs)
}

fn extract_mac(json: &Value) -> Option<String> {
    json.get("result")
        .and_then(|r| r.get("mac"))
        .and_then(|m| m.as_str())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_mac() {
        let reply = json!({"method": "registration", "env": "pro", "result": {"mac": "a8bb50000001", "success": true}});
        assert_eq!(extract_mac(&reply).as_deref(), Some("a8bb50000001"));
        assert_eq!(extract_mac(&json!({"result": {"success": true}})), None);
        assert_eq!(extract_mac(&json!({"error": {"code": -1}})), None);
    }

    #[test]
    fn test_into_bulb_keeps_mac() {
        let found = DiscoveredBulb {
            ip: Ipv4Addr::new(10, 0, 0, 7),
            mac: "a8bb50000007".into(),
        };
        let bulb = found.into_bulb(BulbConfig::default());
        assert_eq!(bulb.ip(), Ipv4Addr::new(10, 0, 0, 7));
        assert_eq!(bulb.mac(), Some("a8bb50000007"));
    }
}
