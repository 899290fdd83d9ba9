//! `.gitignore` merging.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::Result;

use super::plan::GITIGNORE;

/// How the target's `.gitignore` was updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The template ships no `.gitignore`; nothing changed.
    NoTemplate,
    /// The target had none; the template's was copied verbatim.
    Copied,
    /// The template's entries were appended after the target's.
    Appended,
}

impl fmt::Display for MergeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeOutcome::NoTemplate => f.write_str("template has no .gitignore"),
            MergeOutcome::Copied => f.write_str(".gitignore created"),
            MergeOutcome::Appended => f.write_str(".gitignore entries appended"),
        }
    }
}

/// Merge the template's `.gitignore` into `target`.
///
/// Existing content is kept and the template is appended after a newline,
/// in a single write. Lines are not de-duplicated.
pub fn merge_gitignore(template_root: &Path, target: &Path) -> Result<MergeOutcome> {
    merge_with(template_root, target, |dest, contents| fs::write(dest, contents))
}

// The append path calls `write` exactly once, with the whole merged file.
fn merge_with<W>(template_root: &Path, target: &Path, mut write: W) -> Result<MergeOutcome>
where
    W: FnMut(&Path, &str) -> io::Result<()>,
{
    let source = template_root.join(GITIGNORE);
    let dest = target.join(GITIGNORE);

    if !source.is_file() {
        return Ok(MergeOutcome::NoTemplate);
    }

    if !dest.exists() {
        fs::copy(&source, &dest)?;
        return Ok(MergeOutcome::Copied);
    }

    let existing = fs::read_to_string(&dest)?;
    let incoming = fs::read_to_string(&source)?;
    write(&dest, &format!("{}\n{}", existing, incoming))?;

    Ok(MergeOutcome::Appended)
}
