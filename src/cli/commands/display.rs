//! Shared display helpers for dependency findings and install results.
//!
//! Used by `init` and `check` so both render the capability report the same
//! way.

use crate::installer::{InstallReport, StepOutcome};
use crate::requirements::{install_instructions, CapabilityReport, Severity, ToolFinding};
use crate::ui::UserInterface;

/// Print one probe finding, styled by severity.
pub fn show_finding(ui: &mut dyn UserInterface, finding: &ToolFinding) {
    let line = finding.describe();
    match finding.severity() {
        None => ui.success(&line),
        Some(Severity::Error) => ui.error(&line),
        Some(Severity::Warning) => ui.warning(&line),
    }
}

/// Print install instructions for every deficiency in `report`.
pub fn show_instructions(ui: &mut dyn UserInterface, report: &CapabilityReport) {
    let instructions = install_instructions(report);
    if instructions.is_empty() {
        return;
    }

    ui.message("");
    ui.message(&format!("To install on {}:", report.os_name()));
    for line in instructions {
        ui.show_hint(&line);
    }
}

/// Print the per-step summary of a completed install.
pub fn show_install_summary(ui: &mut dyn UserInterface, report: &InstallReport) {
    for (step, outcome) in report.steps() {
        let line = format!("{}: {}", step, outcome);
        match outcome {
            StepOutcome::Done | StepOutcome::Preserved => ui.success(&line),
            StepOutcome::Warning(_) => ui.warning(&line),
        }
    }
    ui.success(&report.gitignore.to_string());
}
