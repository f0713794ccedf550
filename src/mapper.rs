//! Conversions between bulb state, attribute maps and payloads.
//!
//! These are plain field copies. Nothing here validates ranges, clamps or
//! converts units.

use crate::attributes::AttributeMap;
use crate::payload::Payload;
use crate::state::StateAccess;

/// Build a payload that would put a bulb back into `state`.
///
/// Every attribute is copied as-is, except that scene id `0` (the firmware's
/// "no scene") becomes "no value".
///
/// ```
/// use serde_json::json;
/// use wizard::{LightState, parser_to_builder};
///
/// let state = LightState::from_result(json!({"sceneId": 0, "dimming": 50})).unwrap();
/// let payload = parser_to_builder(&state);
/// assert_eq!(payload.get_scene(), None);
/// assert_eq!(payload.get_brightness(), Some(50));
/// ```
pub fn parser_to_builder<S: StateAccess + ?Sized>(state: &S) -> Payload {
    Payload {
        warm_white: state.warm_white(),
        cold_white: state.cold_white(),
        speed: state.speed(),
        scene: state.scene_id().filter(|&id| id != 0),
        rgb: state.rgb(),
        rgbw: state.rgbw(),
        rgbww: state.rgbww(),
        brightness: state.brightness(),
        colortemp: state.colortemp(),
        state: state.state(),
        ratio: state.ratio(),
    }
}

/// Snapshot `state` into an [`AttributeMap`].
///
/// Zero, `false` and unset values all become "no value". The RGB triple is
/// only dropped when all three channels are absent; a partial triple is kept
/// as it is. RGBW and RGBWW are copied unchanged.
///
/// ```
/// use serde_json::json;
/// use wizard::{LightState, Rgb, parser_to_dict};
///
/// let state = LightState::from_result(json!({"r": 10, "b": 20, "speed": 0})).unwrap();
/// let map = parser_to_dict(&state);
/// assert_eq!(map.rgb, Some(Rgb { red: Some(10), green: None, blue: Some(20) }));
/// assert_eq!(map.speed, None);
/// ```
pub fn parser_to_dict<S: StateAccess + ?Sized>(state: &S) -> AttributeMap {
    let rgb = state.rgb();

    AttributeMap {
        warm_white: state.warm_white().filter(|&v| v != 0),
        cold_white: state.cold_white().filter(|&v| v != 0),
        speed: state.speed().filter(|&v| v != 0),
        scene: state.scene_id().filter(|&id| id != 0),
        rgb: (!rgb.is_empty()).then_some(rgb),
        rgbw: state.rgbw(),
        rgbww: state.rgbww(),
        brightness: state.brightness().filter(|&v| v != 0),
        colortemp: state.colortemp().filter(|&v| v != 0),
        state: state.state().filter(|&on| on),
        ratio: state.ratio().filter(|&v| v != 0),
    }
}

/// Build a payload from an [`AttributeMap`], copying every key unchanged.
pub fn dict_to_builder(map: &AttributeMap) -> Payload {
    Payload {
        warm_white: map.warm_white,
        cold_white: map.cold_white,
        speed: map.speed,
        scene: map.scene,
        rgb: map.rgb.unwrap_or_default(),
        rgbw: map.rgbw,
        rgbww: map.rgbww,
        brightness: map.brightness,
        colortemp: map.colortemp,
        state: map.state,
        ratio: map.ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::LightState;
    use crate::types::{ColorRGBW, ColorRGBWW, Rgb};
    use serde_json::{Value, json};

    fn state(value: Value) -> LightState {
        LightState::from_result(value).unwrap()
    }

    fn full_state() -> LightState {
        state(json!({
            "mac": "a8bb50000001",
            "state": true,
            "sceneId": 4,
            "speed": 120,
            "r": 255, "g": 10, "b": 0, "c": 30, "w": 40,
            "dimming": 75,
            "temp": 3000,
            "ratio": 60
        }))
    }

    fn assert_matches_state(payload: &Payload, s: &LightState) {
        assert_eq!(payload.get_warm(), s.warm_white());
        assert_eq!(payload.get_cool(), s.cold_white());
        assert_eq!(payload.get_speed(), s.speed());
        assert_eq!(payload.get_rgb(), s.rgb());
        assert_eq!(payload.get_rgbw(), s.rgbw());
        assert_eq!(payload.get_rgbww(), s.rgbww());
        assert_eq!(payload.get_brightness(), s.brightness());
        assert_eq!(payload.get_temp(), s.colortemp());
        assert_eq!(payload.get_state(), s.state());
        assert_eq!(payload.get_ratio(), s.ratio());
    }

    #[test]
    fn test_parser_to_builder_copies_everything() {
        let s = full_state();
        let payload = parser_to_builder(&s);
        assert_matches_state(&payload, &s);
        assert_eq!(payload.get_scene(), Some(4));
        assert_eq!(payload.get_rgbw(), Some(ColorRGBW::new(255, 10, 0, 40)));
        assert_eq!(
            payload.get_rgbww(),
            Some(ColorRGBWW::new(255, 10, 0, 30, 40))
        );
    }

    #[test]
    fn test_parser_to_builder_scene_zero_is_no_value() {
        let s = state(json!({"sceneId": 0, "temp": 2700, "dimming": 0}));
        let payload = parser_to_builder(&s);
        assert_eq!(payload.get_scene(), None);
        assert_matches_state(&payload, &s);
        // zero is only dropped for the scene
        assert_eq!(payload.get_brightness(), Some(0));

        let s = state(json!({"temp": 2700}));
        assert_eq!(parser_to_builder(&s).get_scene(), None);
    }

    #[test]
    fn test_parser_to_dict_normalizes_defaults() {
        let s = state(json!({
            "state": false,
            "sceneId": 0,
            "speed": 0,
            "c": 0, "w": 0,
            "dimming": 0,
            "temp": 0,
            "ratio": 0
        }));
        let map = parser_to_dict(&s);
        assert_eq!(map, AttributeMap::default());
        assert!(map.to_value().unwrap().as_object().unwrap().values().all(Value::is_null));
    }

    #[test]
    fn test_parser_to_dict_rgb_normalization() {
        let map = parser_to_dict(&state(json!({"dimming": 50})));
        assert_eq!(map.rgb, None);

        let map = parser_to_dict(&state(json!({"r": 10, "b": 20})));
        assert_eq!(
            map.rgb,
            Some(Rgb {
                red: Some(10),
                green: None,
                blue: Some(20)
            })
        );

        // a present zero channel is still a present channel
        let map = parser_to_dict(&state(json!({"r": 0, "g": 0, "b": 0})));
        assert_eq!(map.rgb, Some(Rgb::rgb(0, 0, 0)));
    }

    #[test]
    fn test_parser_to_dict_keeps_wide_colors() {
        let map = parser_to_dict(&full_state());
        assert_eq!(map.rgbw, Some(ColorRGBW::new(255, 10, 0, 40)));
        assert_eq!(map.rgbww, Some(ColorRGBWW::new(255, 10, 0, 30, 40)));
        assert_eq!(map.state, Some(true));
        assert_eq!(map.scene, Some(4));
    }

    #[test]
    fn test_round_trip_through_dict() {
        let s = full_state();
        let payload = dict_to_builder(&parser_to_dict(&s));
        assert_eq!(payload, parser_to_builder(&s));
    }

    #[test]
    fn test_round_trip_through_json() {
        let s = state(json!({"r": 10, "b": 20, "dimming": 30, "sceneId": 0, "state": true}));
        let value = parser_to_dict(&s).to_value().unwrap();
        let payload = dict_to_builder(&AttributeMap::from_value(value).unwrap());

        assert_eq!(payload.get_brightness(), Some(30));
        assert_eq!(payload.get_state(), Some(true));
        assert_eq!(payload.get_rgb(), s.rgb());
        assert_eq!(payload.get_scene(), None);
        assert_eq!(payload.get_speed(), None);
    }

    #[test]
    fn test_dict_to_builder_does_not_normalize() {
        let map = AttributeMap {
            speed: Some(0),
            state: Some(false),
            scene: Some(0),
            ..Default::default()
        };
        let payload = dict_to_builder(&map);
        assert_eq!(payload.get_speed(), Some(0));
        assert_eq!(payload.get_state(), Some(false));
        assert_eq!(payload.get_scene(), Some(0));
        assert!(payload.get_rgb().is_empty());
    }
}
