//! Config get subcommand
//!
//! Retrieves a single configuration value by key.

use std::io::Write;

use anyhow::{Result, bail};
use herald_core::Config;
use herald_core::output::{LineSource, Reporter};

/// Get a single configuration value
///
/// Outputs just the value (no formatting) for scripting.
pub fn cmd_config_get<W: Write, R: LineSource>(
    config: &Config,
    key: &str,
    reporter: &mut Reporter<W, R>,
) -> Result<()> {
    let value = config_value(config, key)?;
    reporter.plain(&value, false)?;
    Ok(())
}

fn config_value(config: &Config, key: &str) -> Result<String> {
    Ok(match key.to_lowercase().as_str() {
        "version" => config.version.to_string(),
        "verbose" => config.verbose.to_string(),
        "color" | "colour" => config.color.to_string(),
        _ => {
            bail!(
                "Unknown configuration key: {key}\n\n\
                Valid keys:\n  \
                  version\n  \
                  verbose\n  \
                  color"
            );
        }
    })
}
