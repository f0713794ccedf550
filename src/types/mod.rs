//! Value types for bulb control parameters.

mod color;
mod scene;

pub use color::{ColorRGBW, ColorRGBWW, Rgb};
pub use scene::SceneMode;
