//! Recursive directory copy.

use std::fs;
use std::path::Path;

use crate::error::{DevflowError, Result};

/// Mirror `source` into `target`.
///
/// Directories are created as needed and files are copied byte-for-byte,
/// overwriting whatever is already at the destination. Symlinks and special
/// files are skipped. The first failure aborts the copy.
pub fn copy_tree(source: &Path, target: &Path) -> Result<()> {
    let copy_err = |from: &Path, to: &Path, e: std::io::Error| DevflowError::CopyFailed {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        message: e.to_string(),
    };

    fs::create_dir_all(target).map_err(|e| copy_err(source, target, e))?;

    for entry in fs::read_dir(source).map_err(|e| copy_err(source, target, e))? {
        let entry = entry.map_err(|e| copy_err(source, target, e))?;
        let src_path = entry.path();
        let dst_path = target.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| copy_err(&src_path, &dst_path, e))?;

        if file_type.is_dir() {
            copy_tree(&src_path, &dst_path)?;
        } else if file_type.is_file() {
            fs::copy(&src_path, &dst_path).map_err(|e| copy_err(&src_path, &dst_path, e))?;
        } else {
            tracing::debug!("Skipping special file {}", src_path.display());
        }
    }

    Ok(())
}
