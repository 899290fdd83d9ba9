//! Per-OS install instructions for missing tools.

use crate::environment::OsId;

use super::status::CapabilityReport;
use super::tool::ToolId;

/// Package-manager command (or pointer) that installs `tool` on `os`.
pub fn install_hint(tool: ToolId, os: OsId) -> String {
    if tool == ToolId::AssistantCli {
        return "npm install -g @anthropic-ai/claude-code".to_string();
    }

    match os {
        OsId::MacOs => match tool {
            ToolId::CCompiler | ToolId::Make => "xcode-select --install".to_string(),
            _ => format!("brew install {}", package_name(tool, os)),
        },
        OsId::Ubuntu => format!("sudo apt install {}", package_name(tool, os)),
        OsId::Fedora => format!("sudo dnf install {}", package_name(tool, os)),
        OsId::Rhel => format!("sudo yum install {}", package_name(tool, os)),
        OsId::Arch => format!("sudo pacman -S {}", package_name(tool, os)),
        OsId::Windows => match tool {
            ToolId::CCompiler | ToolId::Make => {
                "Install Visual Studio Build Tools: winget install Microsoft.VisualStudio.2022.BuildTools"
                    .to_string()
            }
            _ => format!("winget install {}", package_name(tool, os)),
        },
        OsId::Linux | OsId::Unknown => format!(
            "Install {} with your system package manager",
            tool.display_name()
        ),
    }
}

fn package_name(tool: ToolId, os: OsId) -> &'static str {
    match (tool, os) {
        (ToolId::Git, OsId::Windows) => "Git.Git",
        (ToolId::Git, _) => "git",
        (ToolId::Node, OsId::MacOs | OsId::Arch) => "node",
        (ToolId::Node, OsId::Windows) => "OpenJS.NodeJS.LTS",
        (ToolId::Node, _) => "nodejs",
        (ToolId::Python, OsId::MacOs) => "python@3",
        (ToolId::Python, OsId::Arch) => "python",
        (ToolId::Python, OsId::Windows) => "Python.Python.3.12",
        (ToolId::Python, _) => "python3",
        (ToolId::CCompiler, OsId::Ubuntu) => "build-essential",
        (ToolId::CCompiler, _) => "gcc",
        (ToolId::Make, _) => "make",
        (ToolId::AssistantCli, _) => "@anthropic-ai/claude-code",
    }
}

/// Instruction lines for every deficiency in `report`, one per tool.
pub fn install_instructions(report: &CapabilityReport) -> Vec<String> {
    report
        .deficiencies()
        .map(|finding| {
            format!(
                "{}: {}",
                finding.tool,
                install_hint(finding.tool, report.os_id())
            )
        })
        .collect()
}
