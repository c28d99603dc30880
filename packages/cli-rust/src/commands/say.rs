//! Say command implementation
//!
//! Prints one message through the reporter at the requested level.

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::{Args, ValueEnum};
use herald_core::output::{LineSource, Reporter};

/// Severity level for `herald say`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Level {
    Plain,
    Verbose,
    Info,
    Warning,
    Success,
    Error,
}

/// Arguments for the say command
#[derive(Args)]
pub struct SayArgs {
    /// Severity level of the message
    #[arg(value_enum)]
    pub level: Level,

    /// Message text
    pub text: String,

    /// Bold the message (plain and info only)
    #[arg(long)]
    pub bold: bool,

    /// Exit with status 1 after printing (error only)
    #[arg(long)]
    pub exit: bool,
}

/// Print a message at the requested level
///
/// `--exit` on an error line terminates the process with status 1 and
/// never returns.
pub fn cmd_say<W: Write, R: LineSource>(
    args: &SayArgs,
    reporter: &mut Reporter<W, R>,
) -> Result<ExitCode> {
    if args.bold && !matches!(args.level, Level::Plain | Level::Info) {
        bail!("--bold is only supported for the plain and info levels");
    }
    if args.exit && args.level != Level::Error {
        bail!("--exit is only supported for the error level");
    }

    match args.level {
        Level::Plain => reporter.plain(&args.text, args.bold)?,
        Level::Verbose => reporter.verbose(&args.text)?,
        Level::Info => reporter.info(&args.text, args.bold)?,
        Level::Warning => reporter.warning(&args.text)?,
        Level::Success => reporter.success(&args.text)?,
        Level::Error if args.exit => reporter.error_and_exit(&args.text),
        Level::Error => reporter.error(&args.text)?,
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::output::ScriptedInput;

    fn say(level: Level, text: &str, bold: bool) -> Result<String> {
        let args = SayArgs {
            level,
            text: text.to_string(),
            bold,
            exit: false,
        };
        let mut reporter = Reporter::new(Vec::new(), ScriptedInput::new());
        cmd_say(&args, &mut reporter)?;
        Ok(String::from_utf8(reporter.into_inner())?)
    }

    #[test]
    fn say_plain() {
        assert_eq!(say(Level::Plain, "hello", false).unwrap(), "hello\n");
    }

    #[test]
    fn say_info_bold() {
        assert_eq!(
            say(Level::Info, "note", true).unwrap(),
            "\x1b[94m\x1b[1m note\x1b[0m\n"
        );
    }

    #[test]
    fn say_verbose_is_silent_without_verbosity() {
        assert_eq!(say(Level::Verbose, "hidden", false).unwrap(), "");
    }

    #[test]
    fn say_error_without_exit_returns() {
        assert_eq!(
            say(Level::Error, "boom", false).unwrap(),
            "\x1b[91m boom\x1b[0m\n"
        );
    }

    #[test]
    fn say_rejects_bold_on_warning() {
        assert!(say(Level::Warning, "careful", true).is_err());
    }

    #[test]
    fn say_rejects_exit_on_non_error() {
        let args = SayArgs {
            level: Level::Success,
            text: "done".to_string(),
            bold: false,
            exit: true,
        };
        let mut reporter = Reporter::new(Vec::new(), ScriptedInput::new());
        assert!(cmd_say(&args, &mut reporter).is_err());
        assert!(reporter.get_ref().is_empty());
    }
}
