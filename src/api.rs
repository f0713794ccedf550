//! Helper functions for applications driving WiZ bulbs.
//!
//! Each helper is a single delegation to a [`Device`] or to discovery: no
//! retries, no caching, and errors come back exactly as the device layer
//! reported them.

use std::net::Ipv4Addr;

use log::debug;

use crate::config::{BulbConfig, SearchConfig};
use crate::device::{Bulb, Device};
use crate::discovery::discover_bulbs;
use crate::errors::Error;
use crate::payload::Payload;
use crate::scenes::SceneTable;
use crate::state::LightState;
use crate::types::Rgb;

type Result<T> = std::result::Result<T, Error>;

/// Every scene name in `scenes`, each exactly once.
///
/// ```
/// use wizard::{SceneTable, get_scene_names};
///
/// let names = get_scene_names(&SceneTable::builtin());
/// assert!(names.iter().any(|n| n == "Ocean"));
/// ```
pub fn get_scene_names(scenes: &SceneTable) -> Vec<String> {
    scenes.names().map(String::from).collect()
}

/// Find the bulbs answering on the configured subnet.
pub async fn search(config: &SearchConfig) -> Result<Vec<Bulb>> {
    let bulb_config = BulbConfig {
        port: config.port,
        ..Default::default()
    };
    let bulbs = discover_bulbs(config).await?;
    debug!("search on {} found {} bulb(s)", config.broadcast, bulbs.len());

    Ok(bulbs
        .into_iter()
        .map(|found| found.into_bulb(bulb_config.clone()))
        .collect())
}

pub async fn turn_off<D: Device>(device: &D) -> Result<()> {
    device.turn_off().await
}

/// Switch a bulb on with either a scene or a color/brightness.
///
/// With `scene` set, the name is resolved through `scenes` and only the scene
/// id is sent; `rgb` and `brightness` are ignored. An unknown name fails with
/// [`Error::SceneNotFound`] before anything is sent. Without a scene, `rgb`
/// and `brightness` are sent as given, either one possibly absent.
pub async fn set_bulb<D: Device>(
    device: &D,
    scenes: &SceneTable,
    rgb: Option<Rgb>,
    brightness: Option<u8>,
    scene: Option<&str>,
) -> Result<()> {
    let mut payload = Payload::new();

    if let Some(name) = scene {
        payload.scene(scenes.resolve(name)?);
    } else {
        if let Some(rgb) = rgb {
            payload.color(&rgb);
        }
        if let Some(brightness) = brightness {
            payload.brightness(brightness);
        }
    }

    device.turn_on(&payload).await
}

/// Handle for a bulb at a known address, skipping discovery.
///
/// The MAC address is stored as given.
pub fn bulb_from(ip: Ipv4Addr, mac: Option<&str>) -> Bulb {
    Bulb::new(ip, mac)
}

pub async fn get_state<D: Device>(device: &D) -> Result<LightState> {
    device.update_state().await
}
