//! CLI command implementations
//!
//! Each command writes through the shared [`herald_core::Reporter`].

mod ask;
mod config;
mod say;

pub use ask::{AskArgs, cmd_ask};
pub use config::{ConfigArgs, cmd_config};
pub use say::{SayArgs, cmd_say};
