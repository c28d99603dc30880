//! Console reporter
//!
//! Renders severity-styled lines to an output sink, gates verbose lines
//! behind a per-reporter flag and asks yes/no questions.

use std::io::{self, Stdout, Write};

use super::input::{LineSource, TerminalInput};
use super::style::{ColorMode, StyleToken, paint};

/// Hint appended to every prompt
pub const PROMPT_HINT: &str = "[Enter] ";

/// Severity-styled console output with an explicit verbosity flag
///
/// Every write returns `io::Result` so a closed sink surfaces to the caller.
///
/// # Example
///
/// ```
/// use herald_core::output::{Reporter, ScriptedInput};
///
/// let mut reporter = Reporter::new(Vec::new(), ScriptedInput::lines(["y"]));
/// reporter.success("Installed").unwrap();
/// assert!(reporter.ask("Continue? ").unwrap());
/// ```
pub struct Reporter<W = Stdout, R = TerminalInput> {
    out: W,
    input: R,
    verbose: bool,
    colors: bool,
}

impl Reporter<Stdout, TerminalInput> {
    /// Reporter on standard output reading answers from the terminal
    pub fn stdout() -> Self {
        Self::new(io::stdout(), TerminalInput::new())
    }
}

impl<W: Write, R: LineSource> Reporter<W, R> {
    /// Create a reporter with verbosity off and colors on
    pub fn new(out: W, input: R) -> Self {
        Self {
            out,
            input,
            verbose: false,
            colors: true,
        }
    }

    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    pub fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.colors = mode.enabled();
        self
    }

    /// Overwrite the verbosity flag
    pub fn set_verbose(&mut self, enabled: bool) {
        tracing::trace!(enabled, "reporter verbosity set");
        self.verbose = enabled;
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Unstyled line, or bold when `bold` is set
    pub fn plain(&mut self, text: &str, bold: bool) -> io::Result<()> {
        if bold {
            self.line(&[StyleToken::Bold], text)
        } else {
            writeln!(self.out, "{text}")
        }
    }

    /// Unstyled line, written only while verbose
    pub fn verbose(&mut self, text: &str) -> io::Result<()> {
        if !self.verbose {
            return Ok(());
        }
        writeln!(self.out, "{text}")
    }

    pub fn info(&mut self, text: &str, bold: bool) -> io::Result<()> {
        if bold {
            self.line(&[StyleToken::Info, StyleToken::Bold], &format!(" {text}"))
        } else {
            self.line(&[StyleToken::Info], &format!(" {text}"))
        }
    }

    pub fn warning(&mut self, text: &str) -> io::Result<()> {
        self.line(&[StyleToken::Warning], &format!(" {text}"))
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        self.line(&[StyleToken::Success, StyleToken::Bold], text)
    }

    /// Error line; the process keeps running
    pub fn error(&mut self, text: &str) -> io::Result<()> {
        self.line(&[StyleToken::Error], &format!(" {text}"))
    }

    /// Error line, flushed, then exit with status 1
    ///
    /// Write failures are ignored: the process terminates either way.
    pub fn error_and_exit(&mut self, text: &str) -> ! {
        let _ = self.error(text);
        let _ = self.out.flush();
        super::terminate()
    }

    /// Ask a yes/no question and block until the operator answers
    ///
    /// Empty input, `y` and `Y` confirm; anything else declines. Ctrl-C or
    /// end of input before a line is submitted prints a newline and declines.
    pub fn ask(&mut self, prompt: &str) -> io::Result<bool> {
        let styled = paint(
            &[StyleToken::Info],
            &format!("{prompt}{PROMPT_HINT}"),
            self.colors,
        );
        write!(self.out, "{styled}")?;
        self.out.flush()?;

        match self.input.read_line() {
            Ok(Some(answer)) => Ok(is_affirmative(&answer)),
            Ok(None) => {
                tracing::debug!("input closed at prompt, declining");
                writeln!(self.out)?;
                Ok(false)
            }
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {
                tracing::debug!("prompt interrupted, declining");
                writeln!(self.out)?;
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    fn line(&mut self, tokens: &[StyleToken], text: &str) -> io::Result<()> {
        let styled = paint(tokens, text, self.colors);
        writeln!(self.out, "{styled}")
    }
}

/// Whether an answer confirms a prompt
pub fn is_affirmative(answer: &str) -> bool {
    answer.is_empty() || answer == "y" || answer == "Y"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::ScriptedInput;

    fn reporter() -> Reporter<Vec<u8>, ScriptedInput> {
        Reporter::new(Vec::new(), ScriptedInput::new())
    }

    fn asking(lines: &[&str]) -> Reporter<Vec<u8>, ScriptedInput> {
        Reporter::new(Vec::new(), ScriptedInput::lines(lines.iter().copied()))
    }

    fn output<R>(reporter: Reporter<Vec<u8>, R>) -> String {
        String::from_utf8(reporter.out).unwrap()
    }

    #[test]
    fn plain_writes_text_and_newline_only() {
        for text in ["hello", "", "tab\tand unicode \u{2713}"] {
            let mut r = reporter();
            r.plain(text, false).unwrap();
            assert_eq!(output(r), format!("{text}\n"));
        }
    }

    #[test]
    fn plain_bold_wraps_in_bold_and_reset() {
        let mut r = reporter();
        r.plain("hello", true).unwrap();
        assert_eq!(output(r), "\x1b[1mhello\x1b[0m\n");
    }

    #[test]
    fn verbosity_starts_off_and_follows_setter() {
        let mut r = reporter();
        assert!(!r.is_verbose());
        r.set_verbose(true);
        assert!(r.is_verbose());
        r.set_verbose(false);
        assert!(!r.is_verbose());
    }

    #[test]
    fn set_verbose_twice_is_idempotent() {
        let mut r = reporter();
        r.set_verbose(true);
        r.set_verbose(true);
        assert!(r.is_verbose());
    }

    #[test]
    fn verbose_is_silent_when_off() {
        let mut r = reporter();
        r.verbose("x").unwrap();
        assert_eq!(output(r), "");
    }

    #[test]
    fn verbose_writes_unstyled_when_on() {
        let mut r = reporter().with_verbose(true);
        r.verbose("x").unwrap();
        assert_eq!(output(r), "x\n");
    }

    #[test]
    fn info_is_blue_with_leading_space() {
        let mut r = reporter();
        r.info("note", false).unwrap();
        assert_eq!(output(r), "\x1b[94m note\x1b[0m\n");
    }

    #[test]
    fn info_bold_adds_bold_token() {
        let mut r = reporter();
        r.info("note", true).unwrap();
        assert_eq!(output(r), "\x1b[94m\x1b[1m note\x1b[0m\n");
    }

    #[test]
    fn warning_is_yellow() {
        let mut r = reporter();
        r.warning("careful").unwrap();
        assert_eq!(output(r), "\x1b[93m careful\x1b[0m\n");
    }

    #[test]
    fn success_is_green_and_bold() {
        let mut r = reporter();
        r.success("done").unwrap();
        assert_eq!(output(r), "\x1b[92m\x1b[1mdone\x1b[0m\n");
    }

    #[test]
    fn error_is_red_and_returns() {
        let mut r = reporter();
        r.error("boom").unwrap();
        r.plain("still running", false).unwrap();
        assert_eq!(output(r), "\x1b[91m boom\x1b[0m\nstill running\n");
    }

    #[test]
    fn color_mode_never_strips_escapes() {
        let mut r = reporter().with_color_mode(ColorMode::Never);
        assert!(!r.colors_enabled());
        r.success("done").unwrap();
        r.error("boom").unwrap();
        r.plain("bold", true).unwrap();
        assert_eq!(output(r), "done\n boom\nbold\n");
    }

    #[test]
    fn ask_writes_styled_prompt() {
        let mut r = asking(&["y"]);
        r.ask("Continue? ").unwrap();
        assert_eq!(output(r), "\x1b[94mContinue? [Enter] \x1b[0m");
    }

    #[test]
    fn ask_accepts_enter_and_y() {
        for answer in ["", "y", "Y"] {
            let mut r = asking(&[answer]);
            assert!(r.ask("Continue? ").unwrap(), "answer {answer:?}");
        }
    }

    #[test]
    fn ask_declines_everything_else() {
        for answer in ["n", "N", "maybe", "yes", " y"] {
            let mut r = asking(&[answer]);
            assert!(!r.ask("Continue? ").unwrap(), "answer {answer:?}");
        }
    }

    #[test]
    fn ask_interrupt_declines_with_newline() {
        let mut r = Reporter::new(Vec::new(), ScriptedInput::new().push_interrupt());
        assert!(!r.ask("Continue? ").unwrap());
        assert_eq!(output(r), "\x1b[94mContinue? [Enter] \x1b[0m\n");
    }

    #[test]
    fn ask_end_of_input_declines() {
        let mut r = reporter();
        assert!(!r.ask("Continue? ").unwrap());
        assert!(output(r).ends_with('\n'));
    }

    #[test]
    fn ask_consumes_one_line_per_prompt() {
        let mut r = asking(&["n", ""]);
        assert!(!r.ask("First? ").unwrap());
        assert!(r.ask("Second? ").unwrap());
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_propagate() {
        let mut r = Reporter::new(Broken, ScriptedInput::new());
        let err = r.warning("lost").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn read_failures_other_than_interrupt_propagate() {
        struct Failing;

        impl LineSource for Failing {
            fn read_line(&mut self) -> io::Result<Option<String>> {
                Err(io::Error::new(io::ErrorKind::InvalidData, "not utf-8"))
            }
        }

        let mut r = Reporter::new(Vec::new(), Failing);
        let err = r.ask("Continue? ").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
