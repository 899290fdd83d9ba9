//! Dependency check results.
//!
//! Each probed tool produces a [`ToolFinding`]; the findings for one run are
//! collected into a [`CapabilityReport`].

use std::collections::BTreeSet;

use crate::environment::{OsId, OsInfo};

use super::tool::{Severity, ToolId};

/// What the probe concluded about one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingStatus {
    /// Present (and new enough, where a threshold applies).
    Found { version: Option<String> },
    /// Present but older than the supported major version.
    UpgradeNeeded { found: String, required_major: u64 },
    /// Not installed, or not usable.
    NotFound,
}

/// The probe result for a single tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFinding {
    /// Which tool was checked.
    pub tool: ToolId,
    /// The executable that satisfied the check, if any.
    pub program: Option<String>,
    /// The outcome.
    pub status: FindingStatus,
}

impl ToolFinding {
    /// Whether this finding counts against the report.
    pub fn is_deficient(&self) -> bool {
        !matches!(self.status, FindingStatus::Found { .. })
    }

    /// Severity to report this finding at; `None` when satisfied.
    pub fn severity(&self) -> Option<Severity> {
        self.is_deficient().then(|| self.tool.severity())
    }

    /// One-line description for status output.
    pub fn describe(&self) -> String {
        match &self.status {
            FindingStatus::Found {
                version: Some(version),
            } => format!("{} {}", self.tool, version),
            FindingStatus::Found { version: None } => format!("{} found", self.tool),
            FindingStatus::UpgradeNeeded {
                found,
                required_major,
            } => format!(
                "{} {} found, version {} or newer required",
                self.tool, found, required_major
            ),
            FindingStatus::NotFound => format!("{} not found", self.tool),
        }
    }
}

/// Result of one dependency check.
///
/// `has_errors` is derived from the missing sets and cannot drift from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityReport {
    missing_required: BTreeSet<ToolId>,
    missing_optional: BTreeSet<ToolId>,
    os: OsInfo,
    findings: Vec<ToolFinding>,
}

impl CapabilityReport {
    /// Report for a skipped check: nothing missing, OS unknown.
    pub fn all_clear() -> Self {
        Self {
            missing_required: BTreeSet::new(),
            missing_optional: BTreeSet::new(),
            os: OsInfo::unknown(),
            findings: Vec::new(),
        }
    }

    /// Build a report from per-tool findings.
    pub fn from_findings(os: OsInfo, findings: Vec<ToolFinding>) -> Self {
        let mut missing_required = BTreeSet::new();
        let mut missing_optional = BTreeSet::new();

        for finding in findings.iter().filter(|f| f.is_deficient()) {
            if finding.tool.is_required() {
                missing_required.insert(finding.tool);
            } else {
                missing_optional.insert(finding.tool);
            }
        }

        Self {
            missing_required,
            missing_optional,
            os,
            findings,
        }
    }

    /// Whether any tool is missing or outdated.
    pub fn has_errors(&self) -> bool {
        !self.missing_required.is_empty() || !self.missing_optional.is_empty()
    }

    /// Required tools that are missing.
    pub fn missing_required(&self) -> &BTreeSet<ToolId> {
        &self.missing_required
    }

    /// Optional tools that are missing or outdated.
    pub fn missing_optional(&self) -> &BTreeSet<ToolId> {
        &self.missing_optional
    }

    /// Detected OS classification.
    pub fn os_id(&self) -> OsId {
        self.os.id
    }

    /// Detected OS display name.
    pub fn os_name(&self) -> &str {
        &self.os.name
    }

    /// Per-tool findings, in probe order.
    pub fn findings(&self) -> &[ToolFinding] {
        &self.findings
    }

    /// Findings that need action.
    pub fn deficiencies(&self) -> impl Iterator<Item = &ToolFinding> {
        self.findings.iter().filter(|f| f.is_deficient())
    }
}
