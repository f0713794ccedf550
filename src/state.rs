//! Bulb state as read back with `getPilot`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Error;
use crate::types::{ColorRGBW, ColorRGBWW, Rgb, SceneMode};

type Result<T> = std::result::Result<T, Error>;

/// Read access to every attribute of a bulb state.
///
/// Each getter returns `None` when the attribute is unset; that is distinct
/// from a zero value. The mapping helpers in [`crate::mapper`] only go through
/// this trait, so any state source can be converted.
pub trait StateAccess {
    fn warm_white(&self) -> Option<u8>;
    fn cold_white(&self) -> Option<u8>;
    fn speed(&self) -> Option<u8>;
    fn scene_id(&self) -> Option<u16>;
    /// The RGB triple; each channel may be absent on its own.
    fn rgb(&self) -> Rgb;
    fn rgbw(&self) -> Option<ColorRGBW>;
    fn rgbww(&self) -> Option<ColorRGBWW>;
    fn brightness(&self) -> Option<u8>;
    fn colortemp(&self) -> Option<u16>;
    /// Power state: `Some(true)` when the bulb is emitting.
    fn state(&self) -> Option<bool>;
    fn ratio(&self) -> Option<u8>;
}

/// The `result` object of a `getPilot` reply.
///
/// # Example
///
/// ```
/// use serde_json::json;
/// use wizard::{LightState, StateAccess};
///
/// let state = LightState::from_result(json!({
///     "mac": "a8bb50000001",
///     "state": true,
///     "sceneId": 0,
///     "r": 255, "g": 0, "b": 64,
///     "dimming": 60,
/// })).unwrap();
///
/// assert_eq!(state.brightness(), Some(60));
/// assert_eq!(state.rgb().red, Some(255));
/// assert!(state.rgbw().is_none());
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct LightState {
    #[serde(rename = "r")]
    pub(crate) red: Option<u8>,
    #[serde(rename = "g")]
    pub(crate) green: Option<u8>,
    #[serde(rename = "b")]
    pub(crate) blue: Option<u8>,
    #[serde(rename = "c")]
    pub(crate) cool: Option<u8>,
    #[serde(rename = "w")]
    pub(crate) warm: Option<u8>,
    pub(crate) speed: Option<u8>,
    #[serde(rename = "sceneId")]
    pub(crate) scene: Option<u16>,
    #[serde(rename = "schdPsetId")]
    pub(crate) schedule: Option<u16>,
    pub(crate) dimming: Option<u8>,
    pub(crate) temp: Option<u16>,
    pub(crate) state: Option<bool>,
    pub(crate) ratio: Option<u8>,
    pub(crate) mac: Option<String>,
    pub(crate) rssi: Option<i32>,
}

impl LightState {
    /// Parse the `result` object of a `getPilot` reply.
    ///
    /// Unknown keys are ignored.
    pub fn from_result(result: Value) -> Result<Self> {
        serde_json::from_value(result).map_err(Error::JsonLoad)
    }

    /// MAC address the bulb reported with its state.
    pub fn mac(&self) -> Option<&str> {
        self.mac.as_deref()
    }

    /// Wi-Fi signal strength in dBm.
    pub fn rssi(&self) -> Option<i32> {
        self.rssi
    }

    /// The scene currently running, when it is a known preset.
    pub fn scene(&self) -> Option<SceneMode> {
        self.scene_id().and_then(SceneMode::create)
    }
}

impl StateAccess for LightState {
    fn warm_white(&self) -> Option<u8> {
        self.warm
    }

    fn cold_white(&self) -> Option<u8> {
        self.cool
    }

    fn speed(&self) -> Option<u8> {
        self.speed
    }

    /// A running schedule preset reports as the Rhythm scene.
    fn scene_id(&self) -> Option<u16> {
        if self.schedule.is_some() {
            return Some(SceneMode::Rhythm.id());
        }
        self.scene
    }

    fn rgb(&self) -> Rgb {
        Rgb {
            red: self.red,
            green: self.green,
            blue: self.blue,
        }
    }

    fn rgbw(&self) -> Option<ColorRGBW> {
        match (self.red, self.green, self.blue, self.warm) {
            (Some(r), Some(g), Some(b), Some(w)) => Some(ColorRGBW::new(r, g, b, w)),
            _ => None,
        }
    }

    fn rgbww(&self) -> Option<ColorRGBWW> {
        match (self.red, self.green, self.blue, self.cool, self.warm) {
            (Some(r), Some(g), Some(b), Some(c), Some(w)) => Some(ColorRGBWW::new(r, g, b, c, w)),
            _ => None,
        }
    }

    fn brightness(&self) -> Option<u8> {
        self.dimming
    }

    fn colortemp(&self) -> Option<u16> {
        self.temp
    }

    fn state(&self) -> Option<bool> {
        self.state
    }

    fn ratio(&self) -> Option<u8> {
        self.ratio
    }
}
