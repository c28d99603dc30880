//! Console output for CLI tools
//!
//! [`Reporter`] writes severity-styled lines to any sink and owns its own
//! verbosity flag. The free functions below are the flat, process-wide
//! form: they write to standard output and share one verbosity flag.

mod input;
mod reporter;
pub mod style;

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

pub use input::{INTERRUPT_EXIT_CODE, LineSource, ScriptedInput, ScriptedLine, TerminalInput};
pub use reporter::{PROMPT_HINT, Reporter, is_affirmative};
pub use style::{ColorMode, StyleToken, paint};

/// Exit status used when terminating after an error
pub const FAILURE_EXIT_CODE: i32 = 1;

static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Overwrite the process-wide verbosity flag
pub fn set_verbose(enabled: bool) {
    VERBOSE.store(enabled, Ordering::Relaxed);
}

/// Read the process-wide verbosity flag
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Terminate the process with [`FAILURE_EXIT_CODE`]
pub fn terminate() -> ! {
    std::process::exit(FAILURE_EXIT_CODE)
}

fn stdout_reporter() -> Reporter {
    Reporter::stdout().with_verbose(is_verbose())
}

/// Print `text` unstyled, or bold when `bold` is set
pub fn log_plain(text: &str, bold: bool) -> io::Result<()> {
    stdout_reporter().plain(text, bold)
}

/// Print `text` only while the process-wide flag is on
pub fn log_verbose(text: &str) -> io::Result<()> {
    stdout_reporter().verbose(text)
}

/// Print `text` in the info color, optionally bold
pub fn log_info(text: &str, bold: bool) -> io::Result<()> {
    stdout_reporter().info(text, bold)
}

/// Print `text` in the warning color
pub fn log_warning(text: &str) -> io::Result<()> {
    stdout_reporter().warning(text)
}

/// Print `text` in the success color, bold
pub fn log_success(text: &str) -> io::Result<()> {
    stdout_reporter().success(text)
}

/// Print an error line, then exit with status 1 if `should_exit`
pub fn log_error(text: &str, should_exit: bool) -> io::Result<()> {
    let mut reporter = stdout_reporter();
    if should_exit {
        reporter.error_and_exit(text);
    }
    reporter.error(text)
}

/// Ask a yes/no question on the terminal
pub fn ask(prompt: &str) -> io::Result<bool> {
    stdout_reporter().ask(prompt)
}
