//! Command-line interface for devflow.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, IdeAction, IdeArgs, InitArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
