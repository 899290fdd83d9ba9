//! Dependency checking.
//!
//! [`check_dependencies`] walks every [`ToolId`] in order, probes its
//! executables, and applies the per-tool acceptance policy. Findings are
//! streamed to an observer as they are produced so the caller can render
//! progress without waiting for the whole report.

use crate::environment::detect_platform;
use crate::updates::VersionTriple;

use super::probe::SystemProbe;
use super::status::{CapabilityReport, FindingStatus, ToolFinding};
use super::tool::{ToolId, MIN_NODE_MAJOR, MIN_PYTHON_MAJOR};

/// Probe the host for every known tool.
///
/// With `skip` set no probe runs and no OS detection happens: the result is
/// [`CapabilityReport::all_clear`].
pub fn check_dependencies(
    skip: bool,
    platform_id: &str,
    probe: &dyn SystemProbe,
    mut on_finding: impl FnMut(&ToolFinding),
) -> CapabilityReport {
    if skip {
        tracing::debug!("Dependency check skipped");
        return CapabilityReport::all_clear();
    }

    let os = detect_platform(platform_id, probe);
    tracing::debug!("Detected OS: {} ({})", os.name, os.id);

    let mut findings = Vec::with_capacity(ToolId::ALL.len());
    for tool in ToolId::ALL {
        let finding = check_tool(tool, probe);
        on_finding(&finding);
        findings.push(finding);
    }

    CapabilityReport::from_findings(os, findings)
}

/// Probe a single tool and apply its acceptance policy.
pub fn check_tool(tool: ToolId, probe: &dyn SystemProbe) -> ToolFinding {
    match tool {
        ToolId::Node => check_node(probe),
        ToolId::Python => check_python(probe),
        _ => first_found(tool, probe),
    }
}

/// Existence check: the first program that resolves wins.
fn first_found(tool: ToolId, probe: &dyn SystemProbe) -> ToolFinding {
    for program in tool.programs() {
        let result = probe.probe(program);
        if result.found {
            return ToolFinding {
                tool,
                program: Some(program.to_string()),
                status: FindingStatus::Found {
                    version: result.version,
                },
            };
        }
    }
    not_found(tool)
}

fn check_node(probe: &dyn SystemProbe) -> ToolFinding {
    let result = probe.probe("node");
    if !result.found {
        return not_found(ToolId::Node);
    }

    // An unreadable version is given the benefit of the doubt.
    let status = match &result.version {
        Some(version) if VersionTriple::parse(version).major() < MIN_NODE_MAJOR => {
            FindingStatus::UpgradeNeeded {
                found: version.clone(),
                required_major: MIN_NODE_MAJOR,
            }
        }
        _ => FindingStatus::Found {
            version: result.version,
        },
    };

    ToolFinding {
        tool: ToolId::Node,
        program: Some("node".to_string()),
        status,
    }
}

fn check_python(probe: &dyn SystemProbe) -> ToolFinding {
    let python3 = probe.probe("python3");
    if python3.found {
        return ToolFinding {
            tool: ToolId::Python,
            program: Some("python3".to_string()),
            status: FindingStatus::Found {
                version: python3.version,
            },
        };
    }

    let python = probe.probe("python");
    let major = python
        .version
        .as_deref()
        .map(|v| VersionTriple::parse(v).major());

    match major {
        Some(major) if python.found && major >= MIN_PYTHON_MAJOR => ToolFinding {
            tool: ToolId::Python,
            program: Some("python".to_string()),
            status: FindingStatus::Found {
                version: python.version,
            },
        },
        _ => not_found(ToolId::Python),
    }
}

fn not_found(tool: ToolId) -> ToolFinding {
    ToolFinding {
        tool,
        program: None,
        status: FindingStatus::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::OsId;
    use crate::requirements::probe::ProbeResult;
    use std::cell::RefCell;
    use std::collections::HashMap;

    /// Probe answering from a fixed table and recording every call.
    #[derive(Default)]
    struct TableProbe {
        tools: HashMap<&'static str, Option<&'static str>>,
        release: Option<&'static str>,
        calls: RefCell<Vec<String>>,
        release_reads: RefCell<usize>,
    }

    impl TableProbe {
        fn with(mut self, program: &'static str, version: Option<&'static str>) -> Self {
            self.tools.insert(program, version);
            self
        }

        fn everything() -> Self {
            Self::default()
                .with("git", Some("2.43.0"))
                .with("claude", Some("1.0.3"))
                .with("node", Some("20.11.1"))
                .with("python3", Some("3.12.1"))
                .with("gcc", Some("13.2.0"))
                .with("make", Some("4.3"))
        }
    }

    impl SystemProbe for TableProbe {
        fn os_release(&self) -> Option<String> {
            *self.release_reads.borrow_mut() += 1;
            self.release.map(String::from)
        }

        fn probe(&self, program: &str) -> ProbeResult {
            self.calls.borrow_mut().push(program.to_string());
            match self.tools.get(program) {
                Some(version) => ProbeResult::found(*version),
                None => ProbeResult::missing(),
            }
        }
    }

    #[test]
    fn skip_performs_no_probing() {
        let probe = TableProbe::everything();
        let mut observed = 0;
        let report = check_dependencies(true, "linux", &probe, |_| observed += 1);

        assert!(!report.has_errors());
        assert_eq!(report.os_id(), OsId::Unknown);
        assert!(report.missing_required().is_empty());
        assert!(report.missing_optional().is_empty());
        assert!(probe.calls.borrow().is_empty());
        assert_eq!(*probe.release_reads.borrow(), 0);
        assert_eq!(observed, 0);
    }

    #[test]
    fn everything_present_is_clean() {
        let probe = TableProbe::everything();
        let report = check_dependencies(false, "macos", &probe, |_| {});

        assert!(!report.has_errors());
        assert_eq!(report.os_id(), OsId::MacOs);
        assert_eq!(report.findings().len(), ToolId::ALL.len());
    }

    #[test]
    fn findings_are_observed_in_probe_order() {
        let probe = TableProbe::everything();
        let mut seen = Vec::new();
        check_dependencies(false, "macos", &probe, |f| seen.push(f.tool));
        assert_eq!(seen, ToolId::ALL.to_vec());
    }

    #[test]
    fn missing_git_and_assistant_are_required() {
        let probe = TableProbe::default()
            .with("node", Some("20.0.0"))
            .with("python3", None)
            .with("cc", None)
            .with("make", None);
        let report = check_dependencies(false, "macos", &probe, |_| {});

        assert!(report.has_errors());
        assert!(report.missing_required().contains(&ToolId::Git));
        assert!(report.missing_required().contains(&ToolId::AssistantCli));
        assert!(report.missing_optional().is_empty());
    }

    #[test]
    fn old_node_needs_upgrade() {
        let probe = TableProbe::default().with("node", Some("16.20.2"));
        let finding = check_tool(ToolId::Node, &probe);
        assert_eq!(
            finding.status,
            FindingStatus::UpgradeNeeded {
                found: "16.20.2".into(),
                required_major: 18,
            }
        );
    }

    #[test]
    fn node_at_threshold_is_found() {
        let probe = TableProbe::default().with("node", Some("18.0.0"));
        assert!(!check_tool(ToolId::Node, &probe).is_deficient());
    }

    #[test]
    fn node_with_unreadable_version_is_found() {
        let probe = TableProbe::default().with("node", None);
        assert!(!check_tool(ToolId::Node, &probe).is_deficient());
    }

    #[test]
    fn python3_is_preferred() {
        let probe = TableProbe::default()
            .with("python3", Some("3.11.4"))
            .with("python", Some("2.7.18"));
        let finding = check_tool(ToolId::Python, &probe);
        assert_eq!(finding.program.as_deref(), Some("python3"));
        assert_eq!(probe.calls.borrow().as_slice(), ["python3"]);
    }

    #[test]
    fn bare_python_must_be_version_three() {
        let modern = TableProbe::default().with("python", Some("3.10.0"));
        let finding = check_tool(ToolId::Python, &modern);
        assert_eq!(finding.program.as_deref(), Some("python"));
        assert!(!finding.is_deficient());

        let legacy = TableProbe::default().with("python", Some("2.7.18"));
        assert_eq!(
            check_tool(ToolId::Python, &legacy).status,
            FindingStatus::NotFound
        );

        let unknown = TableProbe::default().with("python", None);
        assert_eq!(
            check_tool(ToolId::Python, &unknown).status,
            FindingStatus::NotFound
        );
    }

    #[test]
    fn compiler_accepts_any_candidate() {
        let probe = TableProbe::default().with("clang", Some("17.0.6"));
        let finding = check_tool(ToolId::CCompiler, &probe);
        assert_eq!(finding.program.as_deref(), Some("clang"));
        assert!(!finding.is_deficient());
    }

    #[test]
    fn missing_optional_tools_are_optional() {
        let probe = TableProbe::default()
            .with("git", None)
            .with("claude", None);
        let report = check_dependencies(false, "windows", &probe, |_| {});

        assert!(report.missing_required().is_empty());
        let optional: Vec<_> = report.missing_optional().iter().copied().collect();
        assert_eq!(
            optional,
            vec![ToolId::Node, ToolId::Python, ToolId::CCompiler, ToolId::Make]
        );
    }

    #[test]
    fn linux_reads_release_file() {
        let mut probe = TableProbe::everything();
        probe.release = Some("ID=arch\nPRETTY_NAME=\"Arch Linux\"\n");
        let report = check_dependencies(false, "linux", &probe, |_| {});
        assert_eq!(report.os_id(), OsId::Arch);
        assert_eq!(report.os_name(), "Arch Linux");
    }
}
