//! Ask command implementation
//!
//! Asks one yes/no question and reports the answer through the exit status,
//! so shell scripts can write `herald ask "Deploy? " && deploy`.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Args;
use herald_core::output::{LineSource, Reporter};

/// Arguments for the ask command
#[derive(Args)]
pub struct AskArgs {
    /// Question shown to the operator, followed by "[Enter] "
    pub prompt: String,

    /// Answer yes without prompting
    #[arg(long, short)]
    pub yes: bool,
}

/// Ask the question; exit 0 when confirmed, 1 when declined
pub fn cmd_ask<W: Write, R: LineSource>(
    args: &AskArgs,
    reporter: &mut Reporter<W, R>,
) -> Result<ExitCode> {
    let confirmed = args.yes || reporter.ask(&args.prompt)?;

    reporter.verbose(if confirmed { "Confirmed." } else { "Declined." })?;

    Ok(if confirmed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
