//! Configuration schema for herald
//!
//! Defines the structure and defaults for the config.json file.

use serde::{Deserialize, Serialize};

use crate::output::ColorMode;

/// Main configuration structure for herald
///
/// Serialized to/from `~/.config/herald/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version for migrations
    pub version: u32,

    /// Print verbose lines without passing `-v` (default: false)
    #[serde(default)]
    pub verbose: bool,

    /// Escape sequence policy: "always", "never" or "auto" (default: "always")
    #[serde(default)]
    pub color: ColorMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            verbose: false,
            color: ColorMode::default(),
        }
    }
}
