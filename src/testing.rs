//! Test doubles for the process, network and probe seams.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{DevflowError, Result};
use crate::registry::{TemplateSource, VersionSource};
use crate::requirements::{ProbeResult, SystemProbe};
use crate::shell::{CommandOptions, CommandResult, CommandRunner};
use crate::workspace::copy_tree;

/// Write a complete template tree under `parent` and return its root.
pub fn template_fixture(parent: &Path) -> PathBuf {
    let root = parent.join("template");
    let files = [
        (".claude/commands/agents/planner.md", "# Planner\n"),
        (".devflow/project.yaml", "name: example\n"),
        ("docs/guide.md", "# Guide\n"),
        (".gitignore", ".devflow/sessions/\n"),
        ("web/package.json", r#"{"name":"devflow-web","version":"2.0.0"}"#),
        ("web/src/main.js", "console.log('ide');\n"),
    ];
    for (path, content) in files {
        let file = root.join(path);
        fs::create_dir_all(file.parent().unwrap()).unwrap();
        fs::write(file, content).unwrap();
    }
    root
}

/// "Clones" by copying a local directory.
pub struct DirSource {
    root: PathBuf,
    fetches: RefCell<usize>,
}

impl DirSource {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
            fetches: RefCell::new(0),
        }
    }

    pub fn fetches(&self) -> usize {
        *self.fetches.borrow()
    }
}

impl TemplateSource for DirSource {
    fn fetch(&self, _url: &str, dest: &Path) -> Result<()> {
        *self.fetches.borrow_mut() += 1;
        copy_tree(&self.root, dest)
    }
}

/// Fails every fetch.
pub struct FailingSource {
    git_missing: bool,
}

impl FailingSource {
    /// Leaves a half-written clone behind, then fails.
    pub fn partial() -> Self {
        Self { git_missing: false }
    }

    /// Fails as if `git` were not installed.
    pub fn git_missing() -> Self {
        Self { git_missing: true }
    }
}

impl TemplateSource for FailingSource {
    fn fetch(&self, url: &str, dest: &Path) -> Result<()> {
        if self.git_missing {
            return Err(DevflowError::ToolNotInstalled {
                tool: "git".to_string(),
            });
        }
        fs::create_dir_all(dest.join(".git"))?;
        Err(DevflowError::CloneFailed {
            url: url.to_string(),
            message: "connection reset".to_string(),
        })
    }
}

/// Answers every lookup with the same version, after an optional delay.
pub struct StaticVersion {
    version: Option<String>,
    delay: Duration,
}

impl StaticVersion {
    pub fn new(version: Option<&str>) -> Self {
        Self {
            version: version.map(String::from),
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl VersionSource for StaticVersion {
    fn remote_version(&self, _url: &str) -> Option<String> {
        std::thread::sleep(self.delay);
        self.version.clone()
    }
}

/// Records commands instead of running them.
#[derive(Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<(String, Option<PathBuf>)>>,
    exit_codes: RefCell<VecDeque<i32>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit codes for successive calls; calls beyond the list exit 0.
    pub fn with_exit_codes(codes: &[i32]) -> Self {
        let runner = Self::default();
        runner.exit_codes.borrow_mut().extend(codes.iter().copied());
        runner
    }

    /// Command lines run so far.
    pub fn commands(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|(c, _)| c.clone()).collect()
    }

    /// Working directories of the commands run so far.
    pub fn dirs(&self) -> Vec<Option<PathBuf>> {
        self.calls.borrow().iter().map(|(_, d)| d.clone()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        options: &CommandOptions,
    ) -> Result<CommandResult> {
        self.calls.borrow_mut().push((
            crate::shell::command_line(program, args),
            options.cwd.clone(),
        ));
        let code = self.exit_codes.borrow_mut().pop_front().unwrap_or(0);
        if code == 0 {
            Ok(CommandResult::success(
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        } else {
            Ok(CommandResult::failure(
                Some(code),
                String::new(),
                String::new(),
                Duration::ZERO,
            ))
        }
    }
}

/// Probe answering from a fixed table; unlisted programs are missing.
#[derive(Default)]
pub struct StubProbe {
    tools: HashMap<String, Option<String>>,
}

impl StubProbe {
    /// Every tool present at a recent version.
    pub fn everything() -> Self {
        Self::default()
            .with("git", Some("2.43.0"))
            .with("claude", Some("1.0.0"))
            .with("node", Some("20.11.1"))
            .with("python3", Some("3.12.1"))
            .with("cc", Some("13.2.0"))
            .with("make", Some("4.4.1"))
    }

    pub fn with(mut self, program: &str, version: Option<&str>) -> Self {
        self.tools
            .insert(program.to_string(), version.map(String::from));
        self
    }

    pub fn without(mut self, program: &str) -> Self {
        self.tools.remove(program);
        self
    }
}

impl SystemProbe for StubProbe {
    fn os_release(&self) -> Option<String> {
        None
    }

    fn probe(&self, program: &str) -> ProbeResult {
        match self.tools.get(program) {
            Some(version) => ProbeResult::found(version.as_deref()),
            None => ProbeResult::missing(),
        }
    }
}
