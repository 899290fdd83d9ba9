//! Installers.
//!
//! - [`plan`] - The fixed set of installed paths
//! - [`merge`] - `.gitignore` merging
//! - [`template`] - Project template installation (`devflow init`)
//! - [`ide`] - IDE installation, launch and update (`devflow ide`)

pub mod ide;
pub mod merge;
pub mod plan;
pub mod template;

pub use ide::{IdeInstaller, UpdateOutcome, VersionStatus};
pub use merge::{merge_gitignore, MergeOutcome};
pub use template::{InstallOutcome, InstallReport, StepOutcome, TemplateInstaller};
