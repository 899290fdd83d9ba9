//! Template installation into a project.
//!
//! [`TemplateInstaller::install`] clones the template into a temp workspace
//! under the target, asks before touching existing install entries, copies
//! the selected subtrees, merges `.gitignore`, and removes the workspace on
//! every exit path.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::detection::{find_conflicts, resolve_conflicts};
use crate::error::{DevflowError, Result};
use crate::registry::TemplateSource;
use crate::ui::UserInterface;
use crate::workspace::{copy_tree, CleanupOutcome, TempWorkspace};

use super::merge::{merge_gitignore, MergeOutcome};
use super::plan::{AGENTS_DIR, DEVFLOW_DIR, DEVFLOW_SUBDIRS, DOCS_DIR, PROJECT_FILE, SNAPSHOTS_DIR};

/// Result of one best-effort install step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// The step wrote its content.
    Done,
    /// Existing content was left untouched.
    Preserved,
    /// The step failed; the install carried on.
    Warning(String),
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepOutcome::Done => f.write_str("installed"),
            StepOutcome::Preserved => f.write_str("preserved existing"),
            StepOutcome::Warning(reason) => write!(f, "skipped: {}", reason),
        }
    }
}

/// What a completed install did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Absolute install target.
    pub target: PathBuf,
    /// `.claude/commands/agents`.
    pub agents: StepOutcome,
    /// `.devflow` layout and project file.
    pub devflow: StepOutcome,
    /// `docs`.
    pub docs: StepOutcome,
    /// `.gitignore`.
    pub gitignore: MergeOutcome,
    /// Temp workspace removal.
    pub cleanup: CleanupOutcome,
}

impl InstallReport {
    /// Step names paired with their outcomes, in install order.
    pub fn steps(&self) -> [(&'static str, &StepOutcome); 3] {
        [
            (AGENTS_DIR, &self.agents),
            (DEVFLOW_DIR, &self.devflow),
            (DOCS_DIR, &self.docs),
        ]
    }

    /// Whether any step degraded to a warning.
    pub fn has_warnings(&self) -> bool {
        self.steps()
            .iter()
            .any(|(_, outcome)| matches!(outcome, StepOutcome::Warning(_)))
    }
}

/// How an install ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Everything ran; see the report for per-step results.
    Installed(InstallReport),
    /// The user declined at the conflict prompt. Nothing was copied.
    Cancelled { cleanup: CleanupOutcome },
}

/// Installs the project template.
pub struct TemplateInstaller<'a> {
    settings: &'a Settings,
    source: &'a dyn TemplateSource,
}

impl<'a> TemplateInstaller<'a> {
    /// Create an installer fetching from `source`.
    pub fn new(settings: &'a Settings, source: &'a dyn TemplateSource) -> Self {
        Self { settings, source }
    }

    /// Install into `folder` (or the working directory).
    pub fn install(
        &self,
        folder: Option<&Path>,
        ui: &mut dyn UserInterface,
    ) -> Result<InstallOutcome> {
        let target = self.settings.resolve_target(folder);
        fs::create_dir_all(&target)?;
        tracing::debug!("Install target: {}", target.display());

        let mut workspace = TempWorkspace::acquire(&target);
        let result = self.install_from(&target, workspace.path(), ui);
        let cleanup = workspace.cleanup();

        match result? {
            Some(mut report) => {
                report.cleanup = cleanup;
                Ok(InstallOutcome::Installed(report))
            }
            None => Ok(InstallOutcome::Cancelled { cleanup }),
        }
    }

    fn install_from(
        &self,
        target: &Path,
        template: &Path,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<InstallReport>> {
        let mut spinner = ui.start_spinner("Cloning template...");
        if let Err(e) = self.source.fetch(&self.settings.template_url, template) {
            spinner.finish_error("Clone failed");
            return Err(e);
        }
        spinner.finish_success("Template cloned");
        drop(spinner);

        let conflicts = find_conflicts(target);
        if !resolve_conflicts(&conflicts, ui)? {
            return Ok(None);
        }

        let agents = install_agents(template, target)
            .map(|()| StepOutcome::Done)
            .unwrap_or_else(|e| step_warning("agents", e));
        let devflow = install_devflow(template, target)
            .map(|()| StepOutcome::Done)
            .unwrap_or_else(|e| step_warning("devflow", e));
        let docs = install_docs(template, target).unwrap_or_else(|e| step_warning("docs", e));
        let gitignore = merge_gitignore(template, target)?;

        Ok(Some(InstallReport {
            target: target.to_path_buf(),
            agents,
            devflow,
            docs,
            gitignore,
            cleanup: CleanupOutcome::NotPresent,
        }))
    }
}

fn step_warning(step: &str, e: DevflowError) -> StepOutcome {
    tracing::warn!("Install step '{}' failed: {}", step, e);
    StepOutcome::Warning(e.to_string())
}

/// Replace the target's agents directory with the template's.
fn install_agents(template: &Path, target: &Path) -> Result<()> {
    let source = template.join(AGENTS_DIR);
    let dest = target.join(AGENTS_DIR);

    if !source.is_dir() {
        return Err(DevflowError::TemplateIncomplete {
            path: PathBuf::from(AGENTS_DIR),
        });
    }

    if dest.exists() {
        fs::remove_dir_all(&dest)?;
    }
    fs::create_dir_all(&dest)?;
    copy_tree(&source, &dest)
}

/// Create the `.devflow` layout and its project file.
fn install_devflow(template: &Path, target: &Path) -> Result<()> {
    let dest = target.join(DEVFLOW_DIR);
    for sub in DEVFLOW_SUBDIRS {
        fs::create_dir_all(dest.join(sub))?;
    }

    let project_source = template.join(DEVFLOW_DIR).join(PROJECT_FILE);
    let project_dest = dest.join(PROJECT_FILE);
    if project_source.is_file() {
        fs::copy(&project_source, &project_dest)?;
    } else if !project_dest.exists() {
        fs::write(&project_dest, "")?;
    }

    Ok(())
}

/// Copy `docs` unless the target already has one; always ensure snapshots.
fn install_docs(template: &Path, target: &Path) -> Result<StepOutcome> {
    let dest = target.join(DOCS_DIR);

    let outcome = if dest.exists() {
        StepOutcome::Preserved
    } else {
        let source = template.join(DOCS_DIR);
        if source.is_dir() {
            copy_tree(&source, &dest)?;
            StepOutcome::Done
        } else {
            StepOutcome::Warning("template has no docs directory".to_string())
        }
    };

    fs::create_dir_all(dest.join(SNAPSHOTS_DIR))?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{template_fixture, DirSource, FailingSource};
    use crate::ui::MockUI;
    use crate::workspace::TEMP_PREFIX;
    use tempfile::TempDir;

    fn settings(working_dir: &Path) -> Settings {
        Settings::new(working_dir).with_template_url("fixture://template")
    }

    fn temp_dirs_left(dir: &Path) -> Vec<String> {
        fs::read_dir(dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|name| name.starts_with(TEMP_PREFIX))
            .collect()
    }

    fn installed(outcome: InstallOutcome) -> InstallReport {
        match outcome {
            InstallOutcome::Installed(report) => report,
            other => panic!("expected install, got {other:?}"),
        }
    }

    #[test]
    fn installs_everything_into_empty_target() {
        let temp = TempDir::new().unwrap();
        let fixture = template_fixture(temp.path());
        let work = temp.path().join("work");
        fs::create_dir_all(&work).unwrap();

        let settings = settings(&work);
        let source = DirSource::new(&fixture);
        let mut ui = MockUI::new();

        let report = installed(
            TemplateInstaller::new(&settings, &source)
                .install(Some(Path::new("app")), &mut ui)
                .unwrap(),
        );

        let target = work.join("app");
        assert_eq!(report.target, target);
        assert!(target.join(".claude/commands/agents/planner.md").is_file());
        for sub in DEVFLOW_SUBDIRS {
            assert!(target.join(".devflow").join(sub).is_dir());
        }
        assert_eq!(
            fs::read_to_string(target.join(".devflow/project.yaml")).unwrap(),
            "name: example\n"
        );
        assert!(target.join("docs/guide.md").is_file());
        assert!(target.join("docs/snapshots").is_dir());
        assert!(target.join(".gitignore").is_file());

        assert_eq!(report.agents, StepOutcome::Done);
        assert_eq!(report.devflow, StepOutcome::Done);
        assert_eq!(report.docs, StepOutcome::Done);
        assert_eq!(report.gitignore, MergeOutcome::Copied);
        assert_eq!(report.cleanup, CleanupOutcome::Removed);
        assert!(temp_dirs_left(&target).is_empty());
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn no_folder_installs_into_working_dir() {
        let temp = TempDir::new().unwrap();
        let fixture = template_fixture(temp.path());
        let work = temp.path().join("work");
        fs::create_dir_all(&work).unwrap();

        let settings = settings(&work);
        let source = DirSource::new(&fixture);
        let report = installed(
            TemplateInstaller::new(&settings, &source)
                .install(None, &mut MockUI::new())
                .unwrap(),
        );

        assert_eq!(report.target, work);
        assert!(work.join(".devflow").is_dir());
    }

    #[test]
    fn existing_docs_are_preserved() {
        let temp = TempDir::new().unwrap();
        let fixture = template_fixture(temp.path());
        let target = temp.path().join("target");
        fs::create_dir_all(target.join("docs")).unwrap();
        fs::write(target.join("docs/notes.md"), "keep-me").unwrap();

        let settings = settings(&target);
        let source = DirSource::new(&fixture);
        let mut ui = MockUI::new();
        let report = installed(
            TemplateInstaller::new(&settings, &source)
                .install(None, &mut ui)
                .unwrap(),
        );

        assert_eq!(report.docs, StepOutcome::Preserved);
        assert_eq!(
            fs::read_to_string(target.join("docs/notes.md")).unwrap(),
            "keep-me"
        );
        assert!(!target.join("docs/guide.md").exists());
        assert!(target.join("docs/snapshots").is_dir());
        assert!(target.join(".devflow").is_dir());
    }

    #[test]
    fn declining_leaves_target_untouched() {
        let temp = TempDir::new().unwrap();
        let fixture = template_fixture(temp.path());
        let target = temp.path().join("target");
        fs::create_dir_all(target.join(".devflow")).unwrap();

        let settings = settings(&target);
        let source = DirSource::new(&fixture);
        let mut ui = MockUI::new();
        ui.set_prompt_response("overwrite", "n");

        let outcome = TemplateInstaller::new(&settings, &source)
            .install(None, &mut ui)
            .unwrap();

        assert_eq!(
            outcome,
            InstallOutcome::Cancelled {
                cleanup: CleanupOutcome::Removed
            }
        );
        assert!(!target.join(".claude").exists());
        assert!(!target.join("docs").exists());
        assert!(!target.join(".gitignore").exists());
        assert_eq!(fs::read_dir(target.join(".devflow")).unwrap().count(), 0);
        assert!(temp_dirs_left(&target).is_empty());
    }

    #[test]
    fn clone_failure_is_fatal_and_cleans_up() {
        let temp = TempDir::new().unwrap();
        let target = temp.path().join("target");

        let settings = settings(&target);
        let source = FailingSource::partial();
        let mut ui = MockUI::new();

        let err = TemplateInstaller::new(&settings, &source)
            .install(None, &mut ui)
            .unwrap_err();

        assert!(err.to_string().contains("clone"));
        assert!(target.is_dir());
        assert!(temp_dirs_left(&target).is_empty());
    }

    #[test]
    fn missing_git_error_passes_through() {
        let temp = TempDir::new().unwrap();
        let settings = settings(temp.path());
        let source = FailingSource::git_missing();

        let err = TemplateInstaller::new(&settings, &source)
            .install(None, &mut MockUI::new())
            .unwrap_err();

        assert!(err.is_tool_missing("git"));
    }

    #[test]
    fn agents_are_replaced_not_merged() {
        let temp = TempDir::new().unwrap();
        let fixture = template_fixture(temp.path());
        let target = temp.path().join("target");
        fs::create_dir_all(target.join(AGENTS_DIR)).unwrap();
        fs::write(target.join(AGENTS_DIR).join("stale.md"), "old").unwrap();

        let settings = settings(&target);
        let source = DirSource::new(&fixture);
        installed(
            TemplateInstaller::new(&settings, &source)
                .install(None, &mut MockUI::new())
                .unwrap(),
        );

        assert!(!target.join(AGENTS_DIR).join("stale.md").exists());
        assert!(target.join(AGENTS_DIR).join("planner.md").is_file());
    }

    #[test]
    fn missing_template_parts_become_warnings() {
        let temp = TempDir::new().unwrap();
        let sparse = temp.path().join("sparse");
        fs::create_dir_all(&sparse).unwrap();
        fs::write(sparse.join("README.md"), "nothing else").unwrap();
        let target = temp.path().join("target");

        let settings = settings(&target);
        let source = DirSource::new(&sparse);
        let report = installed(
            TemplateInstaller::new(&settings, &source)
                .install(None, &mut MockUI::new())
                .unwrap(),
        );

        assert!(matches!(report.agents, StepOutcome::Warning(_)));
        assert!(matches!(report.docs, StepOutcome::Warning(_)));
        assert!(report.has_warnings());
        assert_eq!(report.devflow, StepOutcome::Done);
        assert_eq!(
            fs::read_to_string(target.join(".devflow/project.yaml")).unwrap(),
            ""
        );
        assert!(target.join("docs/snapshots").is_dir());
        assert_eq!(report.gitignore, MergeOutcome::NoTemplate);
    }

    #[test]
    fn existing_project_file_kept_when_template_has_none() {
        let temp = TempDir::new().unwrap();
        let sparse = temp.path().join("sparse");
        fs::create_dir_all(&sparse).unwrap();
        let target = temp.path().join("target");
        fs::create_dir_all(target.join(".devflow")).unwrap();
        fs::write(target.join(".devflow/project.yaml"), "name: mine\n").unwrap();

        let settings = settings(&target);
        let source = DirSource::new(&sparse);
        installed(
            TemplateInstaller::new(&settings, &source)
                .install(None, &mut MockUI::new())
                .unwrap(),
        );

        assert_eq!(
            fs::read_to_string(target.join(".devflow/project.yaml")).unwrap(),
            "name: mine\n"
        );
    }

    #[test]
    fn gitignore_is_appended() {
        let temp = TempDir::new().unwrap();
        let fixture = template_fixture(temp.path());
        let target = temp.path().join("target");
        fs::create_dir_all(&target).unwrap();
        fs::write(target.join(".gitignore"), "node_modules/\n").unwrap();

        let settings = settings(&target);
        let source = DirSource::new(&fixture);
        let report = installed(
            TemplateInstaller::new(&settings, &source)
                .install(None, &mut MockUI::new())
                .unwrap(),
        );

        assert_eq!(report.gitignore, MergeOutcome::Appended);
        assert_eq!(
            fs::read_to_string(target.join(".gitignore")).unwrap(),
            "node_modules/\n\n.devflow/sessions/\n"
        );
    }

    #[test]
    fn step_outcome_display() {
        assert_eq!(StepOutcome::Done.to_string(), "installed");
        assert_eq!(StepOutcome::Preserved.to_string(), "preserved existing");
        assert!(StepOutcome::Warning("x".into()).to_string().contains("x"));
    }
}
