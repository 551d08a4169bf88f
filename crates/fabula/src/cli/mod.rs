//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the fabula binary.

mod commands;
mod prompts;
mod spec;
mod write_beat;

pub use commands::{BeatArgs, Cli, Commands};
pub use prompts::show_prompts;
pub use spec::show_spec;
pub use write_beat::write_beat;
