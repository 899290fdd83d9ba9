//! IDE command implementation.
//!
//! `devflow ide start` installs the web IDE if needed and runs its dev
//! server; `devflow ide update` replaces it with the published version.

use crate::cli::args::IdeAction;
use crate::config::Settings;
use crate::error::Result;
use crate::installer::{IdeInstaller, UpdateOutcome};
use crate::registry::{TemplateSource, VersionSource};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The ide command implementation.
pub struct IdeCommand<'a> {
    settings: &'a Settings,
    action: IdeAction,
    source: &'a dyn TemplateSource,
    versions: &'a dyn VersionSource,
    runner: &'a dyn CommandRunner,
}

impl<'a> IdeCommand<'a> {
    /// Create a new ide command.
    pub fn new(
        settings: &'a Settings,
        action: IdeAction,
        source: &'a dyn TemplateSource,
        versions: &'a dyn VersionSource,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            settings,
            action,
            source,
            versions,
            runner,
        }
    }
}

impl Command for IdeCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let installer = IdeInstaller::new(self.settings, self.source, self.versions, self.runner);

        match self.action {
            IdeAction::Start => {
                installer.start(ui)?;
                Ok(CommandResult::success())
            }
            IdeAction::Update => {
                match installer.update(ui)? {
                    UpdateOutcome::Installed => ui.success("IDE installed"),
                    UpdateOutcome::Updated { from, to } => {
                        ui.success(&format!("IDE updated from {} to {}", from, to))
                    }
                    UpdateOutcome::UpToDate => ui.success("IDE is already up to date"),
                }
                Ok(CommandResult::success())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DevflowError;
    use crate::testing::{template_fixture, DirSource, RecordingRunner, StaticVersion};
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn update_reports_fresh_install() {
        let temp = TempDir::new().unwrap();
        let source = DirSource::new(&template_fixture(temp.path()));
        let settings = Settings::new(temp.path().join("work"));
        let versions = StaticVersion::new(Some("2.0.0"));
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        let result = IdeCommand::new(&settings, IdeAction::Update, &source, &versions, &runner)
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_success("IDE installed"));
        assert!(temp.path().join("work/web/package.json").is_file());
    }

    #[test]
    fn update_reports_up_to_date() {
        let temp = TempDir::new().unwrap();
        let source = DirSource::new(&template_fixture(temp.path()));
        let work = temp.path().join("work");
        fs::create_dir_all(work.join("web")).unwrap();
        fs::write(work.join("web/package.json"), r#"{"version":"3.0.0"}"#).unwrap();
        let settings = Settings::new(&work);
        let versions = StaticVersion::new(Some("2.0.0"));
        let runner = RecordingRunner::new();
        let mut ui = MockUI::new();

        IdeCommand::new(&settings, IdeAction::Update, &source, &versions, &runner)
            .execute(&mut ui)
            .unwrap();

        assert!(ui.has_success("already up to date"));
        assert_eq!(source.fetches(), 0);
    }

    #[test]
    fn start_failure_propagates() {
        let temp = TempDir::new().unwrap();
        let source = DirSource::new(&template_fixture(temp.path()));
        let settings = Settings::new(temp.path().join("work"));
        let versions = StaticVersion::new(None);
        let runner = RecordingRunner::with_exit_codes(&[0, 1]);

        let err = IdeCommand::new(&settings, IdeAction::Start, &source, &versions, &runner)
            .execute(&mut MockUI::new())
            .unwrap_err();

        assert!(matches!(err, DevflowError::CommandFailed { code: Some(1), .. }));
    }
}
