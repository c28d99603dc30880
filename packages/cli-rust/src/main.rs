//! herald CLI entry point

use std::process::ExitCode;

fn main() -> ExitCode {
    herald::run()
}
