//! Version comparison for remote artifacts.
//!
//! This module provides:
//! - [`VersionTriple`] parsing of dotted-numeric versions
//! - [`is_newer`] strict comparison used by the IDE update check
//! - [`manifest_version`] extraction of `package.json` versions

pub mod manifest;
pub mod version;

pub use manifest::{manifest_version, read_manifest_version};
pub use version::{is_newer, VersionTriple, VERSION};
