//! Runtime settings for devflow.
//!
//! Everything the core would otherwise read from the process (working
//! directory, host platform, remote locations) is collected once in `main`
//! into [`Settings`] and passed explicitly to commands and installers. Tests
//! build a `Settings` pointing at temp directories and local fixtures.
//!
//! # Example
//!
//! ```
//! use devflow::config::Settings;
//!
//! let settings = Settings::new("/work/project").with_platform("linux");
//! assert_eq!(settings.platform_id, "linux");
//! assert_eq!(settings.resolve_target(None), std::path::PathBuf::from("/work/project"));
//! ```

use std::path::{Path, PathBuf};

use crate::error::Result;

/// Repository cloned by `init` and the IDE installer.
///
/// Builds that ship a different template point this at it through
/// [`TEMPLATE_URL_ENV`] or the hidden `--template-url` flag.
pub const DEFAULT_TEMPLATE_URL: &str = "https://github.com/devflow-cli/devflow.git";

/// Raw manifest holding the latest published IDE version.
///
/// Overridden by [`VERSION_URL_ENV`] or the hidden `--version-url` flag; it
/// should track the `web/package.json` of [`DEFAULT_TEMPLATE_URL`].
pub const DEFAULT_VERSION_URL: &str =
    "https://raw.githubusercontent.com/devflow-cli/devflow/main/web/package.json";

/// Environment variable overriding [`DEFAULT_TEMPLATE_URL`].
pub const TEMPLATE_URL_ENV: &str = "DEVFLOW_TEMPLATE_URL";

/// Environment variable overriding [`DEFAULT_VERSION_URL`].
pub const VERSION_URL_ENV: &str = "DEVFLOW_VERSION_URL";

/// Absolute working directory for an optional `--project` argument.
///
/// A relative project path is anchored at the current directory. Failing to
/// read the current directory is an error, not an empty path.
pub fn resolve_working_dir(project: Option<&Path>) -> Result<PathBuf> {
    match project {
        Some(project) => Ok(std::path::absolute(project)?),
        None => Ok(std::env::current_dir()?),
    }
}

/// Explicit process context for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory relative paths are resolved against.
    pub working_dir: PathBuf,
    /// Host platform identifier (`linux`, `macos`, `windows`, ...).
    pub platform_id: String,
    /// Git URL of the template repository.
    pub template_url: String,
    /// URL of the remote `package.json` used for IDE version checks.
    pub version_url: String,
}

impl Settings {
    /// Settings for `working_dir` on the current host with default remotes.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            platform_id: std::env::consts::OS.to_string(),
            template_url: DEFAULT_TEMPLATE_URL.to_string(),
            version_url: DEFAULT_VERSION_URL.to_string(),
        }
    }

    /// Override the platform identifier.
    pub fn with_platform(mut self, platform_id: &str) -> Self {
        self.platform_id = platform_id.to_string();
        self
    }

    /// Override the template repository URL.
    pub fn with_template_url(mut self, url: &str) -> Self {
        self.template_url = url.to_string();
        self
    }

    /// Override the remote version descriptor URL.
    pub fn with_version_url(mut self, url: &str) -> Self {
        self.version_url = url.to_string();
        self
    }

    /// Absolute install target for an optional folder argument.
    ///
    /// A relative folder is joined onto the working directory; an absolute
    /// one is used as-is; no folder means the working directory itself.
    pub fn resolve_target(&self, folder: Option<&Path>) -> PathBuf {
        match folder {
            Some(folder) if folder.is_absolute() => folder.to_path_buf(),
            Some(folder) => self.working_dir.join(folder),
            None => self.working_dir.clone(),
        }
    }
}
