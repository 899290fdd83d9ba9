//! Host probing for tools and the OS release file.
//!
//! [`SystemProbe`] is the seam between the dependency checker and the real
//! machine. Probing never fails: a tool that cannot be resolved or launched
//! is reported as `found: false`, and a version that cannot be read is
//! reported as `None`.
//!
//! # Example
//!
//! ```no_run
//! use devflow::requirements::probe::{HostProbe, SystemProbe};
//!
//! let probe = HostProbe::new();
//! let git = probe.probe("git");
//! if git.found {
//!     println!("git {}", git.version.unwrap_or_default());
//! }
//! ```

use std::path::PathBuf;

use crate::shell::{execute_quiet, parse_system_path, resolve_tool_path};

/// Linux release identification file.
pub const OS_RELEASE_PATH: &str = "/etc/os-release";

/// Outcome of probing one executable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProbeResult {
    /// Whether the executable resolved on the search path.
    pub found: bool,
    /// Version reported by `--version`, when one could be extracted.
    pub version: Option<String>,
}

impl ProbeResult {
    /// A tool that was not found.
    pub fn missing() -> Self {
        Self::default()
    }

    /// A tool that was found, with an optional version.
    pub fn found(version: Option<&str>) -> Self {
        Self {
            found: true,
            version: version.map(String::from),
        }
    }
}

/// Read-only view of the host used by the dependency checker.
pub trait SystemProbe {
    /// Contents of the OS release file, if readable.
    fn os_release(&self) -> Option<String>;

    /// Resolve `program` on the search path and read its version.
    fn probe(&self, program: &str) -> ProbeResult;
}

/// [`SystemProbe`] backed by the real PATH and filesystem.
#[derive(Debug, Clone)]
pub struct HostProbe {
    path_entries: Vec<PathBuf>,
    os_release_path: PathBuf,
}

impl HostProbe {
    /// Probe using the process PATH.
    pub fn new() -> Self {
        Self {
            path_entries: parse_system_path(),
            os_release_path: PathBuf::from(OS_RELEASE_PATH),
        }
    }

    /// Probe using explicit PATH entries and release file (for testing).
    pub fn with_paths(path_entries: Vec<PathBuf>, os_release_path: impl Into<PathBuf>) -> Self {
        Self {
            path_entries,
            os_release_path: os_release_path.into(),
        }
    }
}

impl Default for HostProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProbe for HostProbe {
    fn os_release(&self) -> Option<String> {
        std::fs::read_to_string(&self.os_release_path).ok()
    }

    fn probe(&self, program: &str) -> ProbeResult {
        let Some(path) = resolve_tool_path(program, &self.path_entries) else {
            tracing::debug!("{} not found on PATH", program);
            return ProbeResult::missing();
        };

        let version = execute_quiet(&path.to_string_lossy(), &["--version"])
            .ok()
            .and_then(|result| extract_version(&result.combined_output()));

        tracing::debug!("{} resolved to {} ({:?})", program, path.display(), version);
        ProbeResult {
            found: true,
            version,
        }
    }
}

/// Extract a version number from `--version` output.
pub fn extract_version(output: &str) -> Option<String> {
    let patterns = [
        r"(\d+\.\d+\.\d+)",
        r"version\s+(\d+\.\d+)",
        r"v(\d+\.\d+)",
        r"(\d+\.\d+)",
    ];

    for pattern in &patterns {
        if let Ok(re) = regex::Regex::new(pattern) {
            if let Some(caps) = re.captures(output) {
                if let Some(m) = caps.get(1) {
                    return Some(m.as_str().to_string());
                }
            }
        }
    }

    None
}
