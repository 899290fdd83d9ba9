//! Init command implementation.
//!
//! The `devflow init` command checks the host for the tools devflow relies
//! on, then installs the project template.

use crate::cli::args::InitArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::installer::{InstallOutcome, TemplateInstaller};
use crate::registry::TemplateSource;
use crate::requirements::{check_dependencies, SystemProbe};
use crate::ui::{Prompt, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::display::{show_finding, show_install_summary, show_instructions};

/// Prompt key for the dependency gate (`DEVFLOW_PROMPT_CONTINUE`).
pub const CONTINUE_PROMPT_KEY: &str = "continue";

/// The init command implementation.
pub struct InitCommand<'a> {
    settings: &'a Settings,
    args: InitArgs,
    probe: &'a dyn SystemProbe,
    source: &'a dyn TemplateSource,
}

impl<'a> InitCommand<'a> {
    /// Create a new init command.
    pub fn new(
        settings: &'a Settings,
        args: InitArgs,
        probe: &'a dyn SystemProbe,
        source: &'a dyn TemplateSource,
    ) -> Self {
        Self {
            settings,
            args,
            probe,
            source,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &InitArgs {
        &self.args
    }

    /// Probe the host; on deficiencies, ask whether to go on.
    fn dependency_gate(&self, ui: &mut dyn UserInterface) -> Result<bool> {
        if !self.args.skip_checks {
            ui.message("Checking dependencies...");
        }

        let report = check_dependencies(
            self.args.skip_checks,
            &self.settings.platform_id,
            self.probe,
            |finding| show_finding(ui, finding),
        );

        if !report.has_errors() {
            return Ok(true);
        }

        show_instructions(ui, &report);
        let answer = ui.prompt(&Prompt::confirm(
            CONTINUE_PROMPT_KEY,
            "Continue anyway?",
            true,
        ))?;
        Ok(answer.as_bool().unwrap_or(true))
    }
}

impl Command for InitCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("devflow init");

        if !self.dependency_gate(ui)? {
            ui.message("Installation cancelled.");
            return Ok(CommandResult::success());
        }

        let installer = TemplateInstaller::new(self.settings, self.source);
        match installer.install(self.args.folder.as_deref(), ui) {
            Ok(InstallOutcome::Installed(report)) => {
                show_install_summary(ui, &report);
                if report.has_warnings() {
                    ui.warning("Some parts of the template could not be installed");
                }
                match &self.args.folder {
                    Some(folder) => {
                        ui.success(&format!("devflow installed in {}", folder.display()))
                    }
                    None => ui.success("devflow installed"),
                }
                Ok(CommandResult::success())
            }
            Ok(InstallOutcome::Cancelled { .. }) => {
                ui.message("Installation cancelled.");
                Ok(CommandResult::success())
            }
            Err(e) if e.is_tool_missing("git") => {
                tracing::debug!("Clone failed: {}", e);
                ui.error("Git is not installed or not on PATH");
                ui.show_hint("Install Git and run `devflow init` again");
                Ok(CommandResult::failure(1))
            }
            Err(e) => Err(e),
        }
    }
}
