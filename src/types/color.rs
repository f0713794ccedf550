//! RGB, RGBW, and RGBWW color representations.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::Error;

/// An RGB triple as a bulb reports it (0-255 each).
///
/// Every channel is optional: a `getPilot` reply may carry some channels and
/// not others, and that partial triple is kept as-is.
///
/// Serialized as a three-element array, with `null` for a missing channel.
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(from = "RgbTuple", into = "RgbTuple")]
pub struct Rgb {
    pub red: Option<u8>,
    pub green: Option<u8>,
    pub blue: Option<u8>,
}

type RgbTuple = (Option<u8>, Option<u8>, Option<u8>);

impl Rgb {
    /// Create a fully populated color.
    pub fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
        }
    }

    /// Create a color with every channel absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when no channel is present.
    ///
    /// ```
    /// use wizard::Rgb;
    ///
    /// assert!(Rgb::new().is_empty());
    /// assert!(!Rgb { red: Some(10), green: None, blue: Some(20) }.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.red.is_none() && self.green.is_none() && self.blue.is_none()
    }

    /// `true` when all three channels are present.
    pub fn is_complete(&self) -> bool {
        self.red.is_some() && self.green.is_some() && self.blue.is_some()
    }
}

impl From<RgbTuple> for Rgb {
    fn from((red, green, blue): RgbTuple) -> Self {
        Self { red, green, blue }
    }
}

impl From<Rgb> for RgbTuple {
    fn from(c: Rgb) -> Self {
        (c.red, c.green, c.blue)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse from comma-separated string (e.g., "255,128,0").
    ///
    /// An empty component is read as an absent channel, so "10,,20" gives a
    /// partial triple.
    fn from_str(s: &str) -> Result<Self, Error> {
        let parts = split_channels(s)?;
        match parts.as_slice() {
            [r, g, b] => Ok(Self {
                red: *r,
                green: *g,
                blue: *b,
            }),
            _ => Err(Error::InvalidColorString(format!(
                "expected format r,g,b: {s}"
            ))),
        }
    }
}

/// An RGBW color (RGB + warm white, 0-255 each).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(from = "(u8, u8, u8, u8)", into = "(u8, u8, u8, u8)")]
pub struct ColorRGBW {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub warm: u8,
}

impl ColorRGBW {
    pub fn new(red: u8, green: u8, blue: u8, warm: u8) -> Self {
        Self {
            red,
            green,
            blue,
            warm,
        }
    }
}

impl From<(u8, u8, u8, u8)> for ColorRGBW {
    fn from((r, g, b, w): (u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, w)
    }
}

impl From<ColorRGBW> for (u8, u8, u8, u8) {
    fn from(c: ColorRGBW) -> Self {
        (c.red, c.green, c.blue, c.warm)
    }
}

impl FromStr for ColorRGBW {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match split_full_channels(s)?.as_slice() {
            [r, g, b, w] => Ok(Self::new(*r, *g, *b, *w)),
            _ => Err(Error::InvalidColorString(format!(
                "expected format r,g,b,w: {s}"
            ))),
        }
    }
}

/// An RGBWW color (RGB + cool white + warm white, 0-255 each).
#[derive(Default, Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(from = "(u8, u8, u8, u8, u8)", into = "(u8, u8, u8, u8, u8)")]
pub struct ColorRGBWW {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub cool: u8,
    pub warm: u8,
}

impl ColorRGBWW {
    pub fn new(red: u8, green: u8, blue: u8, cool: u8, warm: u8) -> Self {
        Self {
            red,
            green,
            blue,
            cool,
            warm,
        }
    }
}

impl From<(u8, u8, u8, u8, u8)> for ColorRGBWW {
    fn from((r, g, b, c, w): (u8, u8, u8, u8, u8)) -> Self {
        Self::new(r, g, b, c, w)
    }
}

impl From<ColorRGBWW> for (u8, u8, u8, u8, u8) {
    fn from(c: ColorRGBWW) -> Self {
        (c.red, c.green, c.blue, c.cool, c.warm)
    }
}

impl FromStr for ColorRGBWW {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match split_full_channels(s)?.as_slice() {
            [r, g, b, c, w] => Ok(Self::new(*r, *g, *b, *c, *w)),
            _ => Err(Error::InvalidColorString(format!(
                "expected format r,g,b,c,w: {s}"
            ))),
        }
    }
}

fn split_channels(s: &str) -> Result<Vec<Option<u8>>, Error> {
    s.split(',')
        .map(str::trim)
        .map(|c| {
            if c.is_empty() {
                return Ok(None);
            }
            c.parse()
                .map(Some)
                .map_err(|_| Error::InvalidColorString(format!("bad channel {c:?} in {s}")))
        })
        .collect()
}

fn split_full_channels(s: &str) -> Result<Vec<u8>, Error> {
    split_channels(s)?
        .into_iter()
        .map(|c| c.ok_or_else(|| Error::InvalidColorString(format!("missing channel in {s}"))))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rgb() {
        let c = Rgb::from_str("255,128,0").unwrap();
        assert_eq!(c, Rgb::rgb(255, 128, 0));
        assert!(c.is_complete());
    }

    #[test]
    fn test_parse_partial_rgb() {
        let c = Rgb::from_str("10,,20").unwrap();
        assert_eq!(c.red, Some(10));
        assert_eq!(c.green, None);
        assert_eq!(c.blue, Some(20));
        assert!(!c.is_empty());
        assert!(!c.is_complete());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Rgb::from_str("1,2"),
            Err(Error::InvalidColorString(_))
        ));
        assert!(Rgb::from_str("1,2,300").is_err());
        assert!(ColorRGBW::from_str("1,,3,4").is_err());
        assert!(ColorRGBWW::from_str("1,2,3,4").is_err());
    }

    #[test]
    fn test_parse_wide_colors() {
        assert_eq!(
            ColorRGBW::from_str("255,128,0,50").unwrap(),
            ColorRGBW::new(255, 128, 0, 50)
        );
        assert_eq!(
            ColorRGBWW::from_str("255,128,0,30,50").unwrap(),
            ColorRGBWW::new(255, 128, 0, 30, 50)
        );
    }

    #[test]
    fn test_rgb_serializes_as_array_with_nulls() {
        let c = Rgb {
            red: Some(10),
            green: None,
            blue: Some(20),
        };
        assert_eq!(
            serde_json::to_value(c).unwrap(),
            serde_json::json!([10, null, 20])
        );
        let back: Rgb = serde_json::from_value(serde_json::json!([10, null, 20])).unwrap();
        assert_eq!(back, c);
    }
}
