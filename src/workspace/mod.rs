//! File-system helpers for installs.
//!
//! - [`copy`] - Recursive directory copy
//! - [`temp`] - Temp workspace with guaranteed cleanup

pub mod copy;
pub mod temp;

pub use copy::copy_tree;
pub use temp::{CleanupOutcome, TempWorkspace, TEMP_PREFIX};
