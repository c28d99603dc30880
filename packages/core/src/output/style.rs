//! Style tokens for reporter output
//!
//! Each token maps to one fixed ANSI escape sequence. The reporter only ever
//! emits these sequences, so output is byte-for-byte predictable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A named display attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleToken {
    /// Reserved, not used by any log operation
    Header,
    Info,
    Verbose,
    Success,
    Warning,
    Error,
    /// Reserved, not used by any log operation
    Yellow,
    Reset,
    Bold,
    /// Reserved, not used by any log operation
    Underline,
}

impl StyleToken {
    /// All tokens in declaration order
    pub const ALL: [StyleToken; 10] = [
        StyleToken::Header,
        StyleToken::Info,
        StyleToken::Verbose,
        StyleToken::Success,
        StyleToken::Warning,
        StyleToken::Error,
        StyleToken::Yellow,
        StyleToken::Reset,
        StyleToken::Bold,
        StyleToken::Underline,
    ];

    /// The terminal escape sequence for this token
    pub const fn escape(self) -> &'static str {
        match self {
            StyleToken::Header => "\x1b[95m",
            StyleToken::Info => "\x1b[94m",
            StyleToken::Verbose => "\x1b[96m",
            StyleToken::Success => "\x1b[92m",
            StyleToken::Warning => "\x1b[93m",
            StyleToken::Error => "\x1b[91m",
            StyleToken::Yellow => "\x1b[0;33m",
            StyleToken::Reset => "\x1b[0m",
            StyleToken::Bold => "\x1b[1m",
            StyleToken::Underline => "\x1b[4m",
        }
    }
}

impl fmt::Display for StyleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.escape())
    }
}

/// Whether styled operations emit escape sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Always emit escape sequences
    #[default]
    Always,
    /// Never emit escape sequences, text only
    Never,
    /// Follow terminal detection (TTY, `NO_COLOR`, `CLICOLOR_FORCE`)
    Auto,
}

impl ColorMode {
    /// Resolve the mode to a concrete on/off decision
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => console::colors_enabled(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Always => "always",
            ColorMode::Never => "never",
            ColorMode::Auto => "auto",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            "auto" => Ok(ColorMode::Auto),
            other => Err(format!(
                "Invalid color mode: '{other}'. Use always, never, or auto"
            )),
        }
    }
}

/// Wrap `text` in the given opening tokens, terminated with a reset
///
/// With colors disabled the text is returned unchanged.
pub fn paint(tokens: &[StyleToken], text: &str, colors: bool) -> String {
    if !colors {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len() + tokens.len() * 5 + 4);
    for token in tokens {
        out.push_str(token.escape());
    }
    out.push_str(text);
    out.push_str(StyleToken::Reset.escape());
    out
}
