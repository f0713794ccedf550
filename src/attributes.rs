//! Plain name/value form of a bulb state.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

use crate::errors::Error;
use crate::types::{ColorRGBW, ColorRGBWW, Rgb};

type Result<T> = std::result::Result<T, Error>;

/// Attribute names used as keys of an [`AttributeMap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Attribute {
    WarmWhite,
    ColdWhite,
    Speed,
    Scene,
    Rgb,
    Rgbw,
    Rgbww,
    Brightness,
    Colortemp,
    State,
    Ratio,
}

/// A serializable snapshot of a bulb state, keyed by attribute name.
///
/// Unlike the wire form, an absent attribute is kept as an explicit `null`
/// so every key is always present.
///
/// ```
/// use serde_json::json;
/// use wizard::{Attribute, AttributeMap};
///
/// let map = AttributeMap { brightness: Some(70), ..Default::default() };
/// let value = map.to_value().unwrap();
/// assert_eq!(value["brightness"], json!(70));
/// assert_eq!(value["scene"], json!(null));
/// assert_eq!(map.get(Attribute::Brightness), json!(70));
/// ```
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq)]
pub struct AttributeMap {
    pub warm_white: Option<u8>,
    pub cold_white: Option<u8>,
    pub speed: Option<u8>,
    pub scene: Option<u16>,
    pub rgb: Option<Rgb>,
    pub rgbw: Option<ColorRGBW>,
    pub rgbww: Option<ColorRGBWW>,
    pub brightness: Option<u8>,
    pub colortemp: Option<u16>,
    pub state: Option<bool>,
    pub ratio: Option<u8>,
}

impl AttributeMap {
    /// Value stored under `attr`, `Value::Null` when it has none.
    pub fn get(&self, attr: Attribute) -> Value {
        match attr {
            Attribute::WarmWhite => json!(self.warm_white),
            Attribute::ColdWhite => json!(self.cold_white),
            Attribute::Speed => json!(self.speed),
            Attribute::Scene => json!(self.scene),
            Attribute::Rgb => json!(self.rgb),
            Attribute::Rgbw => json!(self.rgbw),
            Attribute::Rgbww => json!(self.rgbww),
            Attribute::Brightness => json!(self.brightness),
            Attribute::Colortemp => json!(self.colortemp),
            Attribute::State => json!(self.state),
            Attribute::Ratio => json!(self.ratio),
        }
    }

    /// Iterate over every attribute with its value, `null` included.
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, Value)> + '_ {
        Attribute::iter().map(move |attr| (attr, self.get(attr)))
    }

    /// `true` when every attribute is "no value".
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// JSON object with one key per [`Attribute`].
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::JsonDump)
    }

    /// Read a map back from JSON. A missing key is read as "no value".
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(Error::JsonLoad)
    }
}

impl From<&AttributeMap> for Map<String, Value> {
    fn from(map: &AttributeMap) -> Self {
        map.iter()
            .map(|(attr, value)| (attr.as_ref().to_string(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_keys_match_serialized_object() {
        let value = AttributeMap::default().to_value().unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), Attribute::iter().count());
        for attr in Attribute::iter() {
            assert_eq!(object.get(attr.as_ref()), Some(&Value::Null), "{attr}");
        }
    }

    #[test]
    fn test_get_matches_to_value() {
        let map = AttributeMap {
            warm_white: Some(12),
            rgb: Some(Rgb {
                red: Some(10),
                green: None,
                blue: Some(20),
            }),
            rgbww: Some(ColorRGBWW::new(1, 2, 3, 4, 5)),
            state: Some(true),
            ..Default::default()
        };
        let value = map.to_value().unwrap();
        for (attr, v) in map.iter() {
            assert_eq!(value[attr.as_ref()], v);
        }
        assert_eq!(map.get(Attribute::Rgb), json!([10, null, 20]));
        assert_eq!(map.get(Attribute::Rgbww), json!([1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_attribute_names() {
        assert_eq!(Attribute::WarmWhite.as_ref(), "warm_white");
        assert_eq!(Attribute::Colortemp.to_string(), "colortemp");
        assert_eq!(Attribute::from_str("rgbww").unwrap(), Attribute::Rgbww);
    }

    #[test]
    fn test_from_value_missing_keys() {
        let map = AttributeMap::from_value(json!({"speed": 80})).unwrap();
        assert_eq!(map.speed, Some(80));
        assert_eq!(map.scene, None);

        assert!(matches!(
            AttributeMap::from_value(json!({"rgb": [1, 2]})),
            Err(Error::JsonLoad(_))
        ));
    }

    #[test]
    fn test_into_json_map() {
        let map = AttributeMap {
            ratio: Some(25),
            ..Default::default()
        };
        let object = Map::from(&map);
        assert_eq!(object.len(), 11);
        assert_eq!(object["ratio"], json!(25));
        assert!(!map.is_empty());
        assert!(AttributeMap::default().is_empty());
    }
}
