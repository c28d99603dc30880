//! herald-core - Core library for herald
//!
//! Severity-styled console output, verbosity gating and yes/no prompts,
//! plus the config file the herald CLI reads its defaults from.

pub mod config;
pub mod output;
pub mod version;

pub use config::{Config, ConfigError, load_config, load_config_from, save_config_to};
pub use output::{ColorMode, Reporter, StyleToken};
pub use version::{get_version, get_version_long};
