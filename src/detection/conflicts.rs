//! Conflict detection.
//!
//! Before anything is copied, the target is checked for install entries that
//! already exist, and the user decides whether to go on.

use std::path::Path;

use crate::error::Result;
use crate::installer::plan::CONFLICT_ENTRIES;
use crate::ui::{answer_continues, Prompt, UserInterface};

/// Prompt key for the overwrite confirmation.
pub const OVERWRITE_PROMPT_KEY: &str = "overwrite";

/// Install entries already present in `target`, in plan order.
pub fn find_conflicts(target: &Path) -> Vec<String> {
    CONFLICT_ENTRIES
        .iter()
        .filter(|entry| target.join(entry).exists())
        .map(|entry| entry.to_string())
        .collect()
}

/// Ask whether to continue despite `conflicts`.
///
/// With no conflicts nothing is asked. Only an answer starting with `n`
/// declines; an empty answer continues.
pub fn resolve_conflicts(conflicts: &[String], ui: &mut dyn UserInterface) -> Result<bool> {
    if conflicts.is_empty() {
        return Ok(true);
    }

    ui.warning("The following already exist and may be overwritten:");
    for conflict in conflicts {
        ui.message(&format!("  - {}", conflict));
    }

    let prompt = Prompt::input(
        OVERWRITE_PROMPT_KEY,
        "Continue anyway? [Y/n]",
        Some("y"),
    );
    let answer = ui.prompt(&prompt)?.as_string();
    let proceed = answer_continues(&answer);
    tracing::debug!("Conflict prompt answered {:?}, proceed={}", answer, proceed);

    Ok(proceed)
}
