//! Scene name lookup.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::errors::Error;
use crate::types::SceneMode;

type Result<T> = std::result::Result<T, Error>;

/// An immutable mapping from human-readable scene names to scene ids.
///
/// Build it once at startup and hand a reference to whatever needs to
/// resolve scene names. [`SceneTable::builtin`] (also the [`Default`]) holds
/// every [`SceneMode`] the firmware knows about.
///
/// # Example
///
/// ```
/// use wizard::SceneTable;
///
/// let scenes = SceneTable::builtin();
/// assert_eq!(scenes.id("Ocean"), Some(1));
/// assert_eq!(scenes.name(1000), Some("Rhythm"));
/// assert!(scenes.resolve("NotARealScene").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct SceneTable {
    names: Vec<String>,
    by_name: HashMap<String, u16>,
    by_id: HashMap<u16, usize>,
}

impl SceneTable {
    /// Table of the scenes built into WiZ firmware.
    pub fn builtin() -> Self {
        Self::from_pairs(SceneMode::iter().map(|scene| (scene.name(), scene.id())))
    }

    /// Build a table from `(name, id)` pairs.
    ///
    /// A repeated name keeps its first position and takes the last id given.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u16)>,
        S: Into<String>,
    {
        let mut table = SceneTable {
            names: Vec::new(),
            by_name: HashMap::new(),
            by_id: HashMap::new(),
        };

        for (name, id) in pairs {
            let name = name.into();
            let pos = match table.names.iter().position(|n| *n == name) {
                Some(pos) => pos,
                None => {
                    table.names.push(name.clone());
                    table.names.len() - 1
                }
            };
            table.by_name.insert(name, id);
            table.by_id.insert(id, pos);
        }
        table
    }

    /// Look up the id for a scene name. Names are matched exactly.
    pub fn id(&self, name: &str) -> Option<u16> {
        self.by_name.get(name).copied()
    }

    /// Like [`SceneTable::id`], failing with [`Error::SceneNotFound`].
    pub fn resolve(&self, name: &str) -> Result<u16> {
        self.id(name)
            .ok_or_else(|| Error::SceneNotFound(name.to_string()))
    }

    /// Look up the name registered for a scene id.
    pub fn name(&self, id: u16) -> Option<&str> {
        self.by_id
            .get(&id)
            .and_then(|&pos| self.names.get(pos))
            .map(String::as_str)
    }

    /// All scene names, each once, in table order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SceneTable {
    fn default() -> Self {
        Self::builtin()
    }
}
