//! Pre-install detection.

pub mod conflicts;

pub use conflicts::{find_conflicts, resolve_conflicts, OVERWRITE_PROMPT_KEY};
