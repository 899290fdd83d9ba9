//! Error types for devflow operations.
//!
//! This module defines [`DevflowError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DevflowError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DevflowError::Other`) for unexpected errors
//! - Best-effort steps (partial copies, temp cleanup) never surface here; they
//!   are reported through explicit outcome values instead

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for devflow operations.
#[derive(Debug, Error)]
pub enum DevflowError {
    /// A required external tool could not be launched.
    #[error("{tool} not found: it is not installed or not on PATH")]
    ToolNotInstalled { tool: String },

    /// Cloning the template repository failed.
    #[error("Failed to clone {url}: {message}")]
    CloneFailed { url: String, message: String },

    /// An external command exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// The cloned template is missing something the install cannot do without.
    #[error("Template is missing {path}")]
    TemplateIncomplete { path: PathBuf },

    /// A file-system copy failed part way.
    #[error("Failed to copy {from} to {to}: {message}")]
    CopyFailed {
        from: PathBuf,
        to: PathBuf,
        message: String,
    },

    /// The interactive layer could not produce an answer.
    #[error("Prompt failed: {message}")]
    Prompt { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DevflowError {
    /// Whether this error means `tool` is not installed.
    ///
    /// Matches the typed variant, and also any other error whose message
    /// names the tool together with "not found" (e.g. a shell reporting
    /// `git: command not found`).
    pub fn is_tool_missing(&self, tool: &str) -> bool {
        if let Self::ToolNotInstalled { tool: missing } = self {
            return missing == tool;
        }
        let message = self.to_string().to_lowercase();
        message.contains(&tool.to_lowercase()) && message.contains("not found")
    }
}

/// Result type alias for devflow operations.
pub type Result<T> = std::result::Result<T, DevflowError>;
