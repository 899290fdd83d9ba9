//! Git template fetching.
//!
//! The template is fetched with a shallow `git clone` into a directory the
//! caller owns (normally a [`TempWorkspace`](crate::workspace::TempWorkspace)).

use std::path::Path;

use crate::error::{DevflowError, Result};
use crate::shell::{execute, CommandOptions};

/// Somewhere a template tree can be fetched from.
pub trait TemplateSource {
    /// Materialise the template at `url` into `dest`, which must not exist.
    fn fetch(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Fetches templates with the `git` executable.
#[derive(Debug, Clone)]
pub struct GitFetcher {
    program: String,
}

impl GitFetcher {
    /// Use `git` from PATH.
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for GitFetcher {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        let dest_arg = dest.to_string_lossy();
        let args = ["clone", "--depth", "1", "--quiet", url, dest_arg.as_ref()];

        let result = execute(&self.program, &args, &CommandOptions::captured()).map_err(
            |e| match e {
                DevflowError::ToolNotInstalled { .. } => DevflowError::ToolNotInstalled {
                    tool: "git".to_string(),
                },
                other => other,
            },
        )?;

        if !result.success {
            return Err(DevflowError::CloneFailed {
                url: url.to_string(),
                message: result.stderr.trim().to_string(),
            });
        }

        tracing::debug!("Cloned {} into {}", url, dest.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::process::Command;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Serialize git-process tests to avoid flaky failures under parallel execution
    static GIT_LOCK: Mutex<()> = Mutex::new(());

    fn git(args: &[&str], cwd: &Path) {
        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .output()
            .unwrap();
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Create a bare repo whose single commit holds `files`.
    fn create_bare_repo(parent: &Path, files: &[(&str, &str)]) -> PathBuf {
        let bare_path = parent.join("template.git");
        let work_dir = parent.join("work");
        std::fs::create_dir_all(&work_dir).unwrap();

        git(
            &[
                "init",
                "--bare",
                "--initial-branch=main",
                &bare_path.to_string_lossy(),
            ],
            parent,
        );
        git(
            &["clone", &bare_path.to_string_lossy(), &work_dir.to_string_lossy()],
            parent,
        );
        git(&["config", "user.name", "Test"], &work_dir);
        git(&["config", "user.email", "test@test.com"], &work_dir);

        for (path, content) in files {
            let file = work_dir.join(path);
            std::fs::create_dir_all(file.parent().unwrap()).unwrap();
            std::fs::write(file, content).unwrap();
        }

        git(&["add", "."], &work_dir);
        git(&["commit", "-m", "Initial commit"], &work_dir);
        git(&["push", "origin", "HEAD:main"], &work_dir);

        bare_path
    }

    #[test]
    fn clones_local_bare_repo() {
        let _lock = GIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp = TempDir::new().unwrap();
        let bare = create_bare_repo(
            temp.path(),
            &[("docs/README.md", "# Docs\n"), ("web/package.json", "{}")],
        );

        let dest = temp.path().join("clone");
        GitFetcher::new()
            .fetch(&bare.to_string_lossy(), &dest)
            .unwrap();

        assert!(dest.join("docs/README.md").exists());
        assert!(dest.join("web/package.json").exists());
    }

    #[test]
    fn unreachable_repo_is_clone_failure() {
        let _lock = GIT_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let temp = TempDir::new().unwrap();

        let err = GitFetcher::new()
            .fetch("/nonexistent/path/repo.git", &temp.path().join("clone"))
            .unwrap_err();

        match err {
            DevflowError::CloneFailed { url, message } => {
                assert_eq!(url, "/nonexistent/path/repo.git");
                assert!(!message.is_empty());
            }
            other => panic!("expected CloneFailed, got {other:?}"),
        }
    }

    #[test]
    fn missing_git_binary_is_tool_not_installed() {
        let temp = TempDir::new().unwrap();
        let fetcher = GitFetcher::with_program("devflow-no-such-git");

        let err = fetcher
            .fetch("https://example.com/repo.git", &temp.path().join("clone"))
            .unwrap_err();

        assert!(err.is_tool_missing("git"));
    }
}
