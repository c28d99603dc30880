//! XDG-compliant path resolution for herald
//!
//! - Linux/macOS: ~/.config/herald/
//! - Windows: %APPDATA%\herald\

use std::path::PathBuf;

const APP_DIR: &str = "herald";

/// Get the configuration directory path
///
/// - Linux: `~/.config/herald/`
/// - macOS: `~/.config/herald/` (XDG-style, not ~/Library)
/// - Windows: `%APPDATA%\herald\`
pub fn get_config_dir() -> Option<PathBuf> {
    #[cfg(any(target_os = "linux", target_os = "macos"))]
    {
        directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".config").join(APP_DIR))
    }
    #[cfg(target_os = "windows")]
    {
        directories::BaseDirs::new().map(|dirs| dirs.config_dir().join(APP_DIR))
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        None
    }
}

/// Get the full path to the config file
///
/// Returns: `{config_dir}/config.json`
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|d| d.join("config.json"))
}
