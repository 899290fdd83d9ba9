//! Scratch directory for a fresh template clone.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Name prefix of temp workspaces inside the target directory.
pub const TEMP_PREFIX: &str = ".devflow-tmp-";

/// What happened when a temp workspace was removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    /// The directory existed and was deleted.
    Removed,
    /// Nothing was there to delete.
    NotPresent,
    /// Deletion failed; the error was logged and otherwise ignored.
    Failed(String),
}

impl fmt::Display for CleanupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CleanupOutcome::Removed => f.write_str("removed"),
            CleanupOutcome::NotPresent => f.write_str("not present"),
            CleanupOutcome::Failed(reason) => write!(f, "failed: {}", reason),
        }
    }
}

/// A uniquely named directory under the install target.
///
/// The directory itself is not created here; the clone creates it. It is
/// removed by [`TempWorkspace::cleanup`] or, failing that, on drop.
#[derive(Debug)]
pub struct TempWorkspace {
    path: PathBuf,
    cleaned: bool,
}

impl TempWorkspace {
    /// Reserve a timestamp-named path under `target`.
    pub fn acquire(target: &Path) -> Self {
        let stamp = chrono::Utc::now().timestamp_millis();
        let mut path = target.join(format!("{}{}", TEMP_PREFIX, stamp));
        let mut attempt = 1;
        while path.exists() {
            path = target.join(format!("{}{}-{}", TEMP_PREFIX, stamp, attempt));
            attempt += 1;
        }

        tracing::debug!("Temp workspace: {}", path.display());
        Self {
            path,
            cleaned: false,
        }
    }

    /// Location of the workspace.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the workspace. Never fails; repeated calls report `NotPresent`.
    pub fn cleanup(&mut self) -> CleanupOutcome {
        self.cleaned = true;

        if !self.path.exists() {
            return CleanupOutcome::NotPresent;
        }

        match fs::remove_dir_all(&self.path) {
            Ok(()) => {
                tracing::debug!("Removed temp workspace {}", self.path.display());
                CleanupOutcome::Removed
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to remove temp workspace {}: {}",
                    self.path.display(),
                    e
                );
                CleanupOutcome::Failed(e.to_string())
            }
        }
    }
}

impl Drop for TempWorkspace {
    fn drop(&mut self) {
        if !self.cleaned {
            self.cleanup();
        }
    }
}
