//! Configuration management for herald
//!
//! Loads and saves the JSONC configuration file holding the default
//! verbosity and color policy. Creates a default config if missing.

pub mod paths;
pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::parse_to_serde_value;
use thiserror::Error;

pub use paths::{get_config_dir, get_config_path};
pub use schema::Config;

/// Errors that can occur while loading or saving the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The platform has no resolvable config directory
    #[error("Could not determine config file path")]
    NoPath,

    /// Reading, writing or creating a file failed
    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSONC
    #[error("Invalid JSONC in config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// The file holds no value at all
    #[error("Config file is empty: {}", .path.display())]
    Empty { path: PathBuf },

    /// The file parsed but does not match the schema
    #[error(
        "Invalid configuration in {}. Check for unknown fields or invalid values: {source}",
        .path.display()
    )]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[source] serde_json::Error),
}

fn io_error(action: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> ConfigError {
    let path = path.to_path_buf();
    move |source| ConfigError::Io {
        action,
        path,
        source,
    }
}

/// Load configuration from the default config path
///
/// If the config file doesn't exist, creates a new one with default values.
pub fn load_config() -> Result<Config, ConfigError> {
    let config_path = get_config_path().ok_or(ConfigError::NoPath)?;
    load_config_from(&config_path)
}

/// Load configuration from an explicit path
///
/// Supports JSONC (JSON with comments). Rejects unknown fields.
/// A missing file is created with default values.
pub fn load_config_from(config_path: &Path) -> Result<Config, ConfigError> {
    if !config_path.exists() {
        tracing::info!(
            "Config file not found, creating default at: {}",
            config_path.display()
        );
        let config = Config::default();
        save_config_to(config_path, &config)?;
        return Ok(config);
    }

    let contents = fs::read_to_string(config_path)
        .map_err(io_error("Failed to read config file", config_path))?;

    let parsed_value = parse_to_serde_value(&contents, &Default::default())
        .map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            message: e.to_string(),
        })?
        .ok_or_else(|| ConfigError::Empty {
            path: config_path.to_path_buf(),
        })?;

    let config: Config =
        serde_json::from_value(parsed_value).map_err(|source| ConfigError::Invalid {
            path: config_path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Loaded config from: {}", config_path.display());
    Ok(config)
}

/// Save configuration to an explicit path
///
/// Creates a backup of the existing file (config.json.bak) before overwriting
/// and creates the parent directory if needed.
pub fn save_config_to(config_path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(dir) = config_path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)
                .map_err(io_error("Failed to create config directory", dir))?;
            tracing::info!("Created config directory: {}", dir.display());
        }
    }

    if config_path.exists() {
        let backup_path = config_path.with_extension("json.bak");
        fs::copy(config_path, &backup_path)
            .map_err(io_error("Failed to create backup at", &backup_path))?;
        tracing::debug!("Created config backup: {}", backup_path.display());
    }

    let json = serde_json::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    fs::write(config_path, json).map_err(io_error("Failed to write config file", config_path))?;

    tracing::debug!("Saved config to: {}", config_path.display());

    Ok(())
}
