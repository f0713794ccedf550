//! Command payload for WiZ bulbs.

use serde::Serialize;
use serde_json::Value;

use crate::errors::Error;
use crate::types::{ColorRGBW, ColorRGBWW, Rgb, SceneMode};

type Result<T> = std::result::Result<T, Error>;

/// A partial update to send to a bulb.
///
/// Every attribute left unset keeps the bulb's current setting. A payload is
/// either a scene (optionally with a speed) or a set of color, brightness
/// and white-channel values.
///
/// # Creating Payloads
///
/// 1. **From a scene** using the [`From`] trait:
///    ```
///    use wizard::{Payload, SceneMode};
///    let payload = Payload::from(&SceneMode::Sunset);
///    assert_eq!(payload.get_scene(), Some(3));
///    ```
///
/// 2. **Builder pattern** for combining attributes:
///    ```
///    use wizard::{Payload, Rgb};
///    let mut payload = Payload::new();
///    payload.brightness(80);
///    payload.color(&Rgb::rgb(255, 128, 0));
///    assert_eq!(payload.get_rgb(), Rgb::rgb(255, 128, 0));
///    ```
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Payload {
    pub(crate) warm_white: Option<u8>,
    pub(crate) cold_white: Option<u8>,
    pub(crate) speed: Option<u8>,
    pub(crate) scene: Option<u16>,
    pub(crate) rgb: Rgb,
    pub(crate) rgbw: Option<ColorRGBW>,
    pub(crate) rgbww: Option<ColorRGBWW>,
    pub(crate) brightness: Option<u8>,
    pub(crate) colortemp: Option<u16>,
    pub(crate) state: Option<bool>,
    pub(crate) ratio: Option<u8>,
}

impl Payload {
    /// Create a new empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when no attribute is set.
    ///
    /// ```
    /// use wizard::Payload;
    ///
    /// let mut payload = Payload::new();
    /// assert!(payload.is_empty());
    /// payload.speed(120);
    /// assert!(!payload.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Set the scene id.
    pub fn scene(&mut self, id: u16) {
        self.scene = Some(id);
    }

    /// Set the brightness (`dimming`) level.
    pub fn brightness(&mut self, value: u8) {
        self.brightness = Some(value);
    }

    /// Set the scene animation speed.
    pub fn speed(&mut self, value: u8) {
        self.speed = Some(value);
    }

    /// Set the color temperature in Kelvin.
    pub fn temp(&mut self, kelvin: u16) {
        self.colortemp = Some(kelvin);
    }

    /// Set the RGB color. Absent channels are left untouched on the bulb.
    pub fn color(&mut self, color: &Rgb) {
        self.rgb = *color;
    }

    /// Set the RGBW color (RGB + warm white).
    pub fn color_rgbw(&mut self, color: &ColorRGBW) {
        self.rgbw = Some(*color);
    }

    /// Set the RGBWW color (RGB + cool white + warm white).
    pub fn color_rgbww(&mut self, color: &ColorRGBWW) {
        self.rgbww = Some(*color);
    }

    /// Set the cool white level.
    pub fn cool(&mut self, value: u8) {
        self.cold_white = Some(value);
    }

    /// Set the warm white level.
    pub fn warm(&mut self, value: u8) {
        self.warm_white = Some(value);
    }

    /// Set the power state sent along with the update.
    pub fn state(&mut self, on: bool) {
        self.state = Some(on);
    }

    /// Set the ratio for dual-head fixtures.
    pub fn ratio(&mut self, value: u8) {
        self.ratio = Some(value);
    }

    pub fn get_scene(&self) -> Option<u16> {
        self.scene
    }

    pub fn get_brightness(&self) -> Option<u8> {
        self.brightness
    }

    pub fn get_speed(&self) -> Option<u8> {
        self.speed
    }

    pub fn get_temp(&self) -> Option<u16> {
        self.colortemp
    }

    pub fn get_rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn get_rgbw(&self) -> Option<ColorRGBW> {
        self.rgbw
    }

    pub fn get_rgbww(&self) -> Option<ColorRGBWW> {
        self.rgbww
    }

    pub fn get_cool(&self) -> Option<u8> {
        self.cold_white
    }

    pub fn get_warm(&self) -> Option<u8> {
        self.warm_white
    }

    pub fn get_state(&self) -> Option<bool> {
        self.state
    }

    pub fn get_ratio(&self) -> Option<u8> {
        self.ratio
    }

    /// The `params` object of a `setPilot` request.
    ///
    /// Colors are written widest last, so RGBWW wins over RGBW, which wins
    /// over plain RGB. Explicit warm/cool levels override the white channels
    /// of a wide color.
    ///
    /// ```
    /// use serde_json::json;
    /// use wizard::{Payload, Rgb};
    ///
    /// let mut payload = Payload::new();
    /// payload.color(&Rgb { red: Some(10), green: None, blue: Some(20) });
    /// payload.brightness(40);
    /// assert_eq!(payload.to_params().unwrap(), json!({"r": 10, "b": 20, "dimming": 40}));
    /// ```
    pub fn to_params(&self) -> Result<Value> {
        serde_json::to_value(PilotParams::from(self)).map_err(Error::JsonDump)
    }
}

impl From<&SceneMode> for Payload {
    fn from(scene: &SceneMode) -> Self {
        let mut p = Payload::new();
        p.scene(scene.id());
        p
    }
}

/// Flat wire form of a [`Payload`].
#[serde_with::skip_serializing_none]
#[derive(Default, Debug, Serialize)]
struct PilotParams {
    #[serde(rename = "sceneId")]
    scene: Option<u16>,
    speed: Option<u8>,
    dimming: Option<u8>,
    temp: Option<u16>,
    ratio: Option<u8>,
    state: Option<bool>,
    #[serde(rename = "r")]
    red: Option<u8>,
    #[serde(rename = "g")]
    green: Option<u8>,
    #[serde(rename = "b")]
    blue: Option<u8>,
    #[serde(rename = "c")]
    cool: Option<u8>,
    #[serde(rename = "w")]
    warm: Option<u8>,
}

impl From<&Payload> for PilotParams {
    fn from(p: &Payload) -> Self {
        let mut params = PilotParams {
            scene: p.scene,
            speed: p.speed,
            dimming: p.brightness,
            temp: p.colortemp,
            ratio: p.ratio,
            state: p.state,
            red: p.rgb.red,
            green: p.rgb.green,
            blue: p.rgb.blue,
            ..Default::default()
        };

        if let Some(c) = p.rgbw {
            params.red = Some(c.red);
            params.green = Some(c.green);
            params.blue = Some(c.blue);
            params.warm = Some(c.warm);
        }
        if let Some(c) = p.rgbww {
            params.red = Some(c.red);
            params.green = Some(c.green);
            params.blue = Some(c.blue);
            params.cool = Some(c.cool);
            params.warm = Some(c.warm);
        }
        if p.warm_white.is_some() {
            params.warm = p.warm_white;
        }
        if p.cold_white.is_some() {
            params.cool = p.cold_white;
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_payload_writes_nothing() {
        assert_eq!(Payload::new().to_params().unwrap(), json!({}));
    }

    #[test]
    fn test_scene_payload() {
        let mut payload = Payload::from(&SceneMode::Ocean);
        payload.speed(150);
        assert_eq!(
            payload.to_params().unwrap(),
            json!({"sceneId": 1, "speed": 150})
        );
    }

    #[test]
    fn test_wide_color_precedence() {
        let mut payload = Payload::new();
        payload.color(&Rgb::rgb(1, 2, 3));
        payload.color_rgbw(&ColorRGBW::new(4, 5, 6, 7));
        assert_eq!(
            payload.to_params().unwrap(),
            json!({"r": 4, "g": 5, "b": 6, "w": 7})
        );

        payload.color_rgbww(&ColorRGBWW::new(8, 9, 10, 11, 12));
        assert_eq!(
            payload.to_params().unwrap(),
            json!({"r": 8, "g": 9, "b": 10, "c": 11, "w": 12})
        );
    }

    #[test]
    fn test_white_levels_override_wide_color() {
        let mut payload = Payload::new();
        payload.color_rgbww(&ColorRGBWW::new(8, 9, 10, 11, 12));
        payload.warm(0);
        payload.cool(90);
        assert_eq!(
            payload.to_params().unwrap(),
            json!({"r": 8, "g": 9, "b": 10, "c": 90, "w": 0})
        );
    }

    #[test]
    fn test_remaining_attributes() {
        let mut payload = Payload::new();
        payload.temp(2700);
        payload.ratio(30);
        payload.state(false);
        assert_eq!(
            payload.to_params().unwrap(),
            json!({"temp": 2700, "ratio": 30, "state": false})
        );
        assert_eq!(payload.get_temp(), Some(2700));
        assert_eq!(payload.get_ratio(), Some(30));
        assert_eq!(payload.get_state(), Some(false));
    }
}
