//! External command execution and host environment helpers.

pub mod command;
pub mod platform;

pub use command::{
    command_line, execute, execute_quiet, CommandOptions, CommandResult, CommandRunner,
    SystemRunner,
};
pub use platform::{is_ci, is_executable, parse_system_path, resolve_tool_path};
