//! Developer tool detection.
//!
//! This module probes the host for the external tools a scaffolded project
//! relies on and reports what is missing.
//!
//! # Modules
//!
//! - [`tool`] - The fixed tool list and its classification
//! - [`probe`] - Host probe seam for PATH lookup and version extraction
//! - [`checker`] - Per-tool acceptance policy and the full check
//! - [`status`] - Findings and the capability report
//! - [`registry`] - Per-OS install instructions

pub mod checker;
pub mod probe;
pub mod registry;
pub mod status;
pub mod tool;

pub use checker::{check_dependencies, check_tool};
pub use probe::{HostProbe, ProbeResult, SystemProbe};
pub use registry::{install_hint, install_instructions};
pub use status::{CapabilityReport, FindingStatus, ToolFinding};
pub use tool::{Severity, ToolId};
