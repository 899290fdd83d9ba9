//! Host environment helpers: CI detection and executable lookup.

use std::path::{Path, PathBuf};

/// Check if running in a CI environment.
///
/// Used to force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// File names a tool may have on disk.
fn candidate_names(tool: &str) -> Vec<String> {
    candidate_names_for(tool, cfg!(target_os = "windows"))
}

fn candidate_names_for(tool: &str, windows: bool) -> Vec<String> {
    if windows {
        ["exe", "cmd", "bat"]
            .iter()
            .map(|ext| format!("{}.{}", tool, ext))
            .chain(std::iter::once(tool.to_string()))
            .collect()
    } else {
        vec![tool.to_string()]
    }
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable. Does NOT use
/// the `which` command: it is sometimes a shell builtin with inconsistent
/// error handling.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    let names = candidate_names(tool);
    for dir in path_entries {
        for name in &names {
            let candidate = dir.join(name);
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn is_ci_does_not_panic() {
        let _ = is_ci();
    }

    #[test]
    fn parse_system_path_returns_entries() {
        // PATH is set in every test environment we run in
        assert!(!parse_system_path().is_empty());
    }

    #[test]
    fn windows_candidates_include_script_shims() {
        let names = candidate_names_for("npm", true);
        assert_eq!(names, ["npm.exe", "npm.cmd", "npm.bat", "npm"]);
    }

    #[test]
    fn unix_candidates_are_the_bare_name() {
        assert_eq!(candidate_names_for("npm", false), ["npm"]);
    }

    #[test]
    fn resolve_tool_path_misses_unknown_tool() {
        let temp = TempDir::new().unwrap();
        let entries = vec![temp.path().to_path_buf()];
        assert!(resolve_tool_path("no-such-tool", &entries).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_finds_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("mytool");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

        let entries = vec![PathBuf::from("/nonexistent"), temp.path().to_path_buf()];
        assert_eq!(resolve_tool_path("mytool", &entries), Some(tool));
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("plainfile");
        fs::write(&tool, "data").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o644)).unwrap();

        let entries = vec![temp.path().to_path_buf()];
        assert!(resolve_tool_path("plainfile", &entries).is_none());
    }

    #[test]
    fn resolve_tool_path_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("adir")).unwrap();

        let entries = vec![temp.path().to_path_buf()];
        assert!(resolve_tool_path("adir", &entries).is_none());
    }
}
