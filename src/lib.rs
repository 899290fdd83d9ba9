//! devflow - Scaffold agent-driven development workflows into any project.
//!
//! devflow clones a template repository and installs its agent commands,
//! project state layout and docs into a target folder, merging rather than
//! clobbering what is already there. It can also install and run the
//! template's web IDE.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Explicit per-invocation settings
//! - [`detection`] - Conflict detection before installing
//! - [`environment`] - Host OS detection
//! - [`error`] - Error types and result aliases
//! - [`installer`] - Template and IDE installers
//! - [`registry`] - Template and version sources (git, HTTP)
//! - [`requirements`] - Tool probing and install hints
//! - [`shell`] - External command execution
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//! - [`updates`] - Version comparison and manifest reading
//! - [`workspace`] - Temp workspaces and directory copying
//!
//! # Example
//!
//! ```
//! use devflow::updates::is_newer;
//!
//! assert!(is_newer("1.0.1", "1.0"));
//! assert!(!is_newer("1.0", "1.0.1"));
//! assert!(!is_newer("2.3.4", "2.3.4"));
//! ```
//!
//! For end-to-end installs, see the integration tests.

pub mod cli;
pub mod config;
pub mod detection;
pub mod environment;
pub mod error;
pub mod installer;
pub mod registry;
pub mod requirements;
pub mod shell;
pub mod ui;
pub mod updates;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{DevflowError, Result};
