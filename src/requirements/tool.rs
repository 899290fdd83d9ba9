//! The fixed set of external tools devflow checks for.

use std::fmt;

/// An external tool probed before installing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ToolId {
    Git,
    AssistantCli,
    Node,
    Python,
    CCompiler,
    Make,
}

/// How loudly a missing tool is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// Minimum Node.js major version the IDE tooling runs on.
pub const MIN_NODE_MAJOR: u64 = 18;

/// Minimum Python major version accepted from a bare `python`.
pub const MIN_PYTHON_MAJOR: u64 = 3;

impl ToolId {
    /// Every tool, in probe order.
    pub const ALL: [ToolId; 6] = [
        ToolId::Git,
        ToolId::AssistantCli,
        ToolId::Node,
        ToolId::Python,
        ToolId::CCompiler,
        ToolId::Make,
    ];

    /// Whether installation should not proceed silently without this tool.
    pub fn is_required(self) -> bool {
        matches!(self, ToolId::Git | ToolId::AssistantCli)
    }

    /// Severity used when the tool is missing.
    pub fn severity(self) -> Severity {
        match self {
            ToolId::Git => Severity::Error,
            _ => Severity::Warning,
        }
    }

    /// Executables that satisfy this tool, in preference order.
    pub fn programs(self) -> &'static [&'static str] {
        match self {
            ToolId::Git => &["git"],
            ToolId::AssistantCli => &["claude"],
            ToolId::Node => &["node"],
            ToolId::Python => &["python3", "python"],
            ToolId::CCompiler => &["gcc", "clang", "cc"],
            ToolId::Make => &["make"],
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            ToolId::Git => "Git",
            ToolId::AssistantCli => "Claude CLI",
            ToolId::Node => "Node.js",
            ToolId::Python => "Python 3",
            ToolId::CCompiler => "C compiler",
            ToolId::Make => "make",
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
