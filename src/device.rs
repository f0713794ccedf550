//! Bulb handles and the UDP transport behind them.

use std::net::Ipv4Addr;

use log::{debug, warn};
use serde_json::{Value, json};
use tokio::net::UdpSocket;

use crate::config::BulbConfig;
use crate::errors::Error;
use crate::payload::Payload;
use crate::state::LightState;

type Result<T> = std::result::Result<T, Error>;

/// What the helper functions need from a bulb.
///
/// [`Bulb`] is the network implementation; anything else that can take a
/// payload, switch off and report its state can stand in for it.
pub trait Device {
    /// Apply `payload` and switch the light on.
    fn turn_on(&self, payload: &Payload) -> impl Future<Output = Result<()>> + Send;

    /// Switch the light off.
    fn turn_off(&self) -> impl Future<Output = Result<()>> + Send;

    /// Read the current state back from the device.
    fn update_state(&self) -> impl Future<Output = Result<LightState>> + Send;
}

/// A WiZ bulb reachable over UDP.
///
/// Each request opens a fresh socket, so a `Bulb` holds no connection and is
/// cheap to clone.
///
/// # Example
///
/// ```
/// use std::net::Ipv4Addr;
/// use wizard::Bulb;
///
/// let bulb = Bulb::new(Ipv4Addr::new(192, 168, 1, 100), Some("a8bb50000001"));
/// assert_eq!(bulb.mac(), Some("a8bb50000001"));
/// assert_eq!(bulb.config().port, 38899);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bulb {
    ip: Ipv4Addr,
    mac: Option<String>,
    config: BulbConfig,
}

impl Bulb {
    pub fn new(ip: Ipv4Addr, mac: Option<&str>) -> Self {
        Bulb {
            ip,
            mac: mac.map(String::from),
            config: BulbConfig::default(),
        }
    }

    /// Replace the connection settings.
    pub fn with_config(mut self, config: BulbConfig) -> Self {
        self.config = config;
        self
    }

    pub fn ip(&self) -> Ipv4Addr {
        self.ip
    }

    pub fn mac(&self) -> Option<&str> {
        self.mac.as_deref()
    }

    pub fn config(&self) -> &BulbConfig {
        &self.config
    }

    /// Send a `setPilot` with the payload's params.
    ///
    /// `state: true` is added unless the payload carries a power state of
    /// its own.
    pub async fn set(&self, payload: &Payload) -> Result<()> {
        let mut params = payload.to_params()?;
        if payload.get_state().is_none() {
            params["state"] = json!(true);
        }

        self.send_command(&json!({"method": "setPilot", "params": params}))
            .await?;
        Ok(())
    }

    /// Switch the light off with `setState`, leaving its settings alone.
    pub async fn switch_off(&self) -> Result<()> {
        self.send_command(&json!({"method": "setState", "params": {"state": false}}))
            .await?;
        Ok(())
    }

    /// Query the bulb for its current state.
    pub async fn get_state(&self) -> Result<LightState> {
        let resp = self.send_command(&json!({"method": "getPilot"})).await?;
        LightState::from_result(resp.get("result").cloned().unwrap_or(Value::Null))
    }

    /// Send a request, retrying socket failures per [`BulbConfig`].
    ///
    /// Once the bulb has answered nothing is resent: a malformed reply or an
    /// error object ([`Error::Bulb`]) is returned straight away.
    async fn send_command(&self, msg: &Value) -> Result<Value> {
        let msg_str = serde_json::to_string(msg).map_err(Error::JsonDump)?;
        debug!("{} <- {}", self.ip, msg_str);

        let mut attempt = 0;
        let response = loop {
            match self.send_udp(&msg_str).await {
                Ok(response) => break response,
                Err(e @ Error::Socket { .. }) => match self.config.retry_delays.get(attempt) {
                    Some(delay) => {
                        warn!("{}: {}; retrying in {:?}", self.ip, e, delay);
                        tokio::time::sleep(*delay).await;
                        attempt += 1;
                    }
                    None => return Err(e),
                },
                Err(e) => return Err(e),
            }
        };

        debug!("{} -> {}", self.ip, response);
        check_reply(response)
    }

    async fn send_udp(&self, msg: &str) -> Result<Value> {
        let socket = UdpSocket::bind("0.0.0.0:0")
            .await
            .map_err(|e| Error::socket("bind", e))?;

        socket
            .connect((self.ip, self.config.port))
            .await
            .map_err(|e| Error::socket("connect", e))?;

        socket
            .send(msg.as_bytes())
            .await
            .map_err(|e| Error::socket("send", e))?;

        let mut buffer = [0u8; 4096];

        let bytes = tokio::time::timeout(self.config.timeout, socket.recv(&mut buffer))
            .await
            .map_err(|_| {
                Error::socket(
                    "receive",
                    std::io::Error::new(std::io::ErrorKind::TimedOut, "receive timeout"),
                )
            })?
            .map_err(|e| Error::socket("receive", e))?;

        let response = String::from_utf8(buffer[..bytes].to_vec()).map_err(Error::Utf8Decode)?;
        serde_json::from_str(&response).map_err(Error::JsonLoad)
    }
}

impl Device for Bulb {
    async fn turn_on(&self, payload: &Payload) -> Result<()> {
        self.set(payload).await
    }

    async fn turn_off(&self) -> Result<()> {
        self.switch_off().await
    }

    async fn update_state(&self) -> Result<LightState> {
        self.get_state().await
    }
}

fn check_reply(response: Value) -> Result<Value> {
    let Some(err) = response.get("error") else {
        return Ok(response);
    };
    let code = err.get("code").and_then(Value::as_i64).unwrap_or(0);
    let message = err
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown error");
    Err(Error::bulb(code, message))
}
