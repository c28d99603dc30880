//! herald CLI - Print severity-styled messages and ask yes/no questions
//!
//! This module contains the CLI implementation used by the binary.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::style;
use herald_core::output::{self, ColorMode, Reporter};
use herald_core::{Config, config, get_version, get_version_long, load_config, load_config_from};
use tracing_subscriber::EnvFilter;

/// Print severity-styled messages and ask yes/no questions
#[derive(Parser)]
#[command(name = "herald")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Print severity-styled messages and ask yes/no questions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print verbose lines
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Color policy: always, never or auto (overrides the config file)
    #[arg(long, global = true, value_name = "MODE")]
    color: Option<ColorMode>,

    /// Use this config file instead of ~/.config/herald/config.json
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one message at a severity level
    Say(commands::SayArgs),
    /// Ask a yes/no question; exits 0 when confirmed, 1 when declined
    Ask(commands::AskArgs),
    /// Manage configuration
    Config(commands::ConfigArgs),
}

impl Cli {
    /// Color policy after flags are applied over the config file
    fn color_mode(&self, config: &Config) -> ColorMode {
        if self.no_color {
            ColorMode::Never
        } else {
            self.color.unwrap_or(config.color)
        }
    }
}

/// Initialize tracing on stderr so stdout carries only reporter output
///
/// Defaults to warnings and errors unless RUST_LOG is set.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

pub fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let config_path = match cli.config.clone().or_else(config::get_config_path) {
        Some(path) => path,
        None => {
            display_error(&anyhow::anyhow!("Could not determine config path"));
            return ExitCode::FAILURE;
        }
    };

    let loaded = match &cli.config {
        Some(path) => load_config_from(path),
        None => load_config(),
    };

    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            // Display rich error for invalid config
            eprintln!("{} Configuration error", style("Error:").red().bold());
            eprintln!();
            eprintln!("  {}", e);
            eprintln!();
            eprintln!("  Config file: {}", style(config_path.display()).yellow());
            eprintln!();
            eprintln!(
                "  {} Check the config file for syntax errors or unknown fields.",
                style("Tip:").cyan()
            );
            return ExitCode::FAILURE;
        }
    };

    let verbose = cli.verbose > 0 || config.verbose;
    output::set_verbose(verbose);

    let mut reporter = Reporter::stdout()
        .with_verbose(verbose)
        .with_color_mode(cli.color_mode(&config));

    match dispatch(cli, &config, &config_path, &mut reporter) {
        Ok(code) => code,
        Err(e) => {
            display_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(
    cli: Cli,
    config: &Config,
    config_path: &std::path::Path,
    reporter: &mut Reporter,
) -> Result<ExitCode> {
    reporter.verbose(&format!("herald {}", get_version_long()))?;
    reporter.verbose(&format!("Config loaded from: {}", config_path.display()))?;

    match cli.command {
        Some(Commands::Say(args)) => commands::cmd_say(&args, reporter),
        Some(Commands::Ask(args)) => commands::cmd_ask(&args, reporter),
        Some(Commands::Config(args)) => {
            commands::cmd_config(args, config, config_path, reporter).map(|()| ExitCode::SUCCESS)
        }
        None => {
            // No command - show a welcome message and hint to use --help
            reporter.info(&format!("herald {}", get_version()), true)?;
            reporter.plain("", false)?;
            reporter.plain(
                &format!("Run {} for available commands.", style("--help").green()),
                false,
            )?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn display_error(err: &anyhow::Error) {
    eprintln!("{} {:#}", style("Error:").red().bold(), err);
}
