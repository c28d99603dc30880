//! Line sources for confirmation prompts
//!
//! A prompt needs exactly one line of operator input, and Ctrl-C during that
//! read must come back as `io::ErrorKind::Interrupted` instead of killing the
//! process. On an attended terminal the line is read in raw mode, where
//! console reports Ctrl-C itself. Otherwise stdin is read on a helper thread
//! while a Ctrl-C handler waits to cut the read short.

use std::collections::VecDeque;
use std::io::{self, BufRead, IsTerminal};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};
use std::thread;

use console::Term;

/// Exit status for Ctrl-C outside of a prompt (128 + SIGINT)
pub const INTERRUPT_EXIT_CODE: i32 = 130;

/// Something that yields one line of operator input at a time
pub trait LineSource {
    /// Read the next line without its trailing newline
    ///
    /// Returns `Ok(None)` at end of input. An operator interrupt is reported
    /// as an error of kind `io::ErrorKind::Interrupted`.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

impl<T: LineSource + ?Sized> LineSource for &mut T {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        (**self).read_line()
    }
}

/// Reads from the terminal when attended, otherwise from stdin
///
/// Raw mode needs stdin to be a terminal and a terminal to echo into; stderr
/// is used for the echo so redirecting stdout keeps raw-mode handling.
pub struct TerminalInput {
    term: Term,
}

impl TerminalInput {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal() && self.term.is_term()
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TerminalInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        if self.is_interactive() {
            return match self.term.read_line() {
                Ok(line) => Ok(Some(line)),
                Err(err) => {
                    if err.kind() == io::ErrorKind::Interrupted {
                        // Raw mode may have hidden it
                        let _ = self.term.show_cursor();
                    }
                    Err(err)
                }
            };
        }

        read_stdin_line()
    }
}

enum StdinEvent {
    Line(io::Result<Option<String>>),
    Interrupt,
}

/// Helper thread reading one stdin line per request
///
/// A read cut short by Ctrl-C stays pending; the line the operator types
/// afterwards answers the next prompt.
struct StdinReader {
    requests: Sender<()>,
    events: Receiver<StdinEvent>,
    pending: bool,
}

static STDIN_READER: OnceLock<Mutex<StdinReader>> = OnceLock::new();

/// Set while a prompt is blocked on stdin
static PROMPT_ACTIVE: AtomicBool = AtomicBool::new(false);

fn stdin_reader() -> &'static Mutex<StdinReader> {
    STDIN_READER.get_or_init(|| {
        let (request_tx, request_rx) = mpsc::channel::<()>();
        let (event_tx, event_rx) = mpsc::channel();

        let lines = event_tx.clone();
        thread::spawn(move || {
            while request_rx.recv().is_ok() {
                let mut buf = String::new();
                let result = match io::stdin().lock().read_line(&mut buf) {
                    Ok(0) => Ok(None),
                    Ok(_) => Ok(Some(strip_line_ending(buf))),
                    Err(err) => Err(err),
                };
                if lines.send(StdinEvent::Line(result)).is_err() {
                    break;
                }
            }
        });

        // Outside a prompt Ctrl-C still ends the process
        let installed = ctrlc::set_handler(move || {
            if PROMPT_ACTIVE.load(Ordering::SeqCst) {
                let _ = event_tx.send(StdinEvent::Interrupt);
            } else {
                std::process::exit(INTERRUPT_EXIT_CODE);
            }
        });
        match installed {
            Ok(()) => tracing::debug!("installed Ctrl-C handler for prompts"),
            Err(err) => tracing::warn!("Could not install Ctrl-C handler: {err}"),
        }

        Mutex::new(StdinReader {
            requests: request_tx,
            events: event_rx,
            pending: false,
        })
    })
}

fn reader_stopped() -> io::Error {
    io::Error::new(io::ErrorKind::BrokenPipe, "stdin reader stopped")
}

fn read_stdin_line() -> io::Result<Option<String>> {
    let mut reader = stdin_reader()
        .lock()
        .map_err(|_| io::Error::other("stdin reader lock poisoned"))?;

    if !reader.pending {
        reader.requests.send(()).map_err(|_| reader_stopped())?;
        reader.pending = true;
    }

    // Interrupts left over from an earlier prompt do not count; a line typed
    // ahead does
    let mut early = None;
    while let Ok(event) = reader.events.try_recv() {
        if let StdinEvent::Line(result) = event {
            early = Some(result);
            break;
        }
    }

    let event = match early {
        Some(result) => StdinEvent::Line(result),
        None => {
            PROMPT_ACTIVE.store(true, Ordering::SeqCst);
            let event = reader.events.recv();
            PROMPT_ACTIVE.store(false, Ordering::SeqCst);
            event.map_err(|_| reader_stopped())?
        }
    };

    match event {
        StdinEvent::Line(result) => {
            reader.pending = false;
            result
        }
        StdinEvent::Interrupt => Err(io::Error::new(
            io::ErrorKind::Interrupted,
            "read interrupted",
        )),
    }
}

/// One scripted response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedLine {
    /// The operator typed this line and pressed Enter
    Line(String),
    /// The operator pressed Ctrl-C
    Interrupt,
}

/// Canned operator input, consumed front to back
///
/// Once the script is exhausted every read reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<ScriptedLine>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script that answers each prompt with the next of `lines`
    pub fn lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines
                .into_iter()
                .map(|l| ScriptedLine::Line(l.into()))
                .collect(),
        }
    }

    pub fn push_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push_back(ScriptedLine::Line(line.into()));
        self
    }

    pub fn push_interrupt(mut self) -> Self {
        self.lines.push_back(ScriptedLine::Interrupt);
        self
    }

    /// Number of responses not yet consumed
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedInput {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        match self.lines.pop_front() {
            Some(ScriptedLine::Line(line)) => Ok(Some(strip_line_ending(line))),
            Some(ScriptedLine::Interrupt) => Err(io::Error::new(
                io::ErrorKind::Interrupted,
                "read interrupted",
            )),
            None => Ok(None),
        }
    }
}

fn strip_line_ending(mut line: String) -> String {
    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    line
}
