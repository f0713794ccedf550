//! # wizard
//!
//! Small async helpers for WiZ smart bulbs: find them on the local network,
//! read their state, turn that state into a command payload (or a plain
//! attribute map and back), and switch them on, off, to a color or to a scene.
//!
//! ## Quick Start
//!
//! ```ignore
//! use wizard::{Rgb, SceneTable, SearchConfig, get_state, parser_to_dict, search, set_bulb};
//!
//! async fn demo() -> Result<(), wizard::Error> {
//!     let scenes = SceneTable::builtin();
//!     let bulbs = search(&SearchConfig::default()).await?;
//!
//!     for bulb in &bulbs {
//!         let state = get_state(bulb).await?;
//!         println!("{}: {}", bulb.ip(), parser_to_dict(&state).to_value()?);
//!
//!         set_bulb(bulb, &scenes, Some(Rgb::rgb(0, 0, 255)), Some(60), None).await?;
//!         set_bulb(bulb, &scenes, None, None, Some("Ocean")).await?;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pieces
//!
//! - [`LightState`] is what a bulb reports, read through [`StateAccess`]
//! - [`Payload`] is a partial update sent to a bulb
//! - [`AttributeMap`] is a serializable snapshot of a state
//! - [`parser_to_builder`], [`parser_to_dict`] and [`dict_to_builder`] convert
//!   between the three
//! - [`SceneTable`] resolves scene names; build it once and pass it around
//! - [`Device`] is the capability the helpers need; [`Bulb`] implements it
//!   over UDP
//!
//! ## Communication
//!
//! Bulbs speak JSON over UDP port 38899 and must be on the same local network.

mod api;
mod attributes;
mod config;
mod device;
mod discovery;
mod errors;
mod mapper;
mod payload;
mod scenes;
mod state;
mod types;

// Re-export public API
pub use api::{bulb_from, get_scene_names, get_state, search, set_bulb, turn_off};
pub use attributes::{Attribute, AttributeMap};
pub use config::{BULB_PORT, BulbConfig, SearchConfig};
pub use device::{Bulb, Device};
pub use discovery::{DiscoveredBulb, discover_bulbs};
pub use errors::Error;
pub use mapper::{dict_to_builder, parser_to_builder, parser_to_dict};
pub use payload::Payload;
pub use scenes::SceneTable;
pub use state::{LightState, StateAccess};
pub use types::{ColorRGBW, ColorRGBWW, Rgb, SceneMode};
