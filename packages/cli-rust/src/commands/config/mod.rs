//! Config subcommand implementations
//!
//! Provides `herald config` subcommands for viewing and managing configuration.

mod get;
mod set;
mod show;

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use clap::{Args, Subcommand};
use herald_core::Config;
use herald_core::output::{LineSource, Reporter};

pub use get::cmd_config_get;
pub use set::cmd_config_set;
pub use show::cmd_config_show;

/// Configuration command arguments
#[derive(Args)]
pub struct ConfigArgs {
    /// Output as JSON instead of table format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<ConfigSubcommands>,
}

/// Configuration management subcommands
#[derive(Subcommand)]
pub enum ConfigSubcommands {
    /// Show current configuration
    Show {
        /// Output as JSON instead of table format
        #[arg(long)]
        json: bool,
    },
    /// Get a single configuration value
    Get {
        /// Configuration key ("version", "verbose" or "color")
        key: String,
    },
    /// Set a configuration value
    Set {
        /// Configuration key to set ("verbose" or "color")
        key: String,
        /// Value to set
        value: String,
    },
    /// Print the config file path
    Path,
}

/// Handle config command
///
/// Routes to the appropriate handler based on the subcommand.
/// If no subcommand is given, defaults to Show.
pub fn cmd_config<W: Write, R: LineSource>(
    args: ConfigArgs,
    config: &Config,
    config_path: &Path,
    reporter: &mut Reporter<W, R>,
) -> Result<()> {
    match args.command {
        Some(ConfigSubcommands::Show { json }) => {
            cmd_config_show(config, config_path, json || args.json, reporter)
        }
        Some(ConfigSubcommands::Get { key }) => cmd_config_get(config, &key, reporter),
        Some(ConfigSubcommands::Set { key, value }) => {
            cmd_config_set(config_path, &key, &value, reporter)
        }
        Some(ConfigSubcommands::Path) => {
            reporter.plain(&config_path.display().to_string(), false)?;
            Ok(())
        }
        None => cmd_config_show(config, config_path, args.json, reporter),
    }
}
