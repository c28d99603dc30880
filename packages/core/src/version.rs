//! Version information for herald

/// Get the current version string
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Get the long version string with build information
///
/// Falls back to "unknown" when the build did not set `HERALD_GIT_HASH`.
pub fn get_version_long() -> String {
    let git_hash = option_env!("HERALD_GIT_HASH").unwrap_or("unknown");
    format!("{} (git: {git_hash})", get_version())
}
