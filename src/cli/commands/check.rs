//! Check command implementation.
//!
//! The `devflow check` command runs the dependency probe on its own.

use crate::config::Settings;
use crate::error::Result;
use crate::requirements::{check_dependencies, SystemProbe};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::display::{show_finding, show_instructions};

/// The check command implementation.
pub struct CheckCommand<'a> {
    settings: &'a Settings,
    probe: &'a dyn SystemProbe,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(settings: &'a Settings, probe: &'a dyn SystemProbe) -> Self {
        Self { settings, probe }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("devflow check");

        let report = check_dependencies(false, &self.settings.platform_id, self.probe, |finding| {
            show_finding(ui, finding)
        });
        ui.message(&format!("Platform: {}", report.os_name()));
        show_instructions(ui, &report);

        if report.missing_required().is_empty() {
            if !report.has_errors() {
                ui.success("All dependencies found");
            }
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
