//! The fixed set of paths an install writes.
//!
//! All paths are relative to the target directory and, for sources, to the
//! root of the cloned template.

/// Agent command definitions for the assistant CLI.
pub const AGENTS_DIR: &str = ".claude/commands/agents";

/// devflow's own project state.
pub const DEVFLOW_DIR: &str = ".devflow";

/// Directories created under [`DEVFLOW_DIR`].
pub const DEVFLOW_SUBDIRS: [&str; 3] = ["agents", "memory", "sessions"];

/// Project descriptor inside [`DEVFLOW_DIR`].
pub const PROJECT_FILE: &str = "project.yaml";

/// Documentation tree.
pub const DOCS_DIR: &str = "docs";

/// Directory ensured under [`DOCS_DIR`].
pub const SNAPSHOTS_DIR: &str = "snapshots";

/// Ignore file merged rather than replaced.
pub const GITIGNORE: &str = ".gitignore";

/// IDE subtree.
pub const WEB_DIR: &str = "web";

/// Package manifest inside [`WEB_DIR`].
pub const WEB_MANIFEST: &str = "package.json";

/// Dependencies directory inside [`WEB_DIR`].
pub const WEB_NODE_MODULES: &str = "node_modules";

/// Every top-level entry an install touches.
pub const PLAN_ENTRIES: [&str; 4] = [AGENTS_DIR, DEVFLOW_DIR, DOCS_DIR, GITIGNORE];

/// Entries whose existing content an install can overwrite.
///
/// `.gitignore` is merged, never overwritten, so it is not a conflict.
pub const CONFLICT_ENTRIES: [&str; 3] = [AGENTS_DIR, DEVFLOW_DIR, DOCS_DIR];
