//! Host operating system detection.
//!
//! Maps the platform identifier to an [`OsId`], refining Linux hosts by
//! reading the release identification file. Detection never fails: anything
//! unrecognised degrades to the least specific classification.

use std::fmt;

use crate::requirements::probe::SystemProbe;

/// Operating system family, as far as install instructions care.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsId {
    MacOs,
    Windows,
    Ubuntu,
    Fedora,
    Rhel,
    Arch,
    Linux,
    Unknown,
}

impl fmt::Display for OsId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsId::MacOs => "macos",
            OsId::Windows => "windows",
            OsId::Ubuntu => "ubuntu",
            OsId::Fedora => "fedora",
            OsId::Rhel => "rhel",
            OsId::Arch => "arch",
            OsId::Linux => "linux",
            OsId::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A detected operating system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsInfo {
    /// Classification used to pick install instructions.
    pub id: OsId,
    /// Human-readable name (e.g. the release file's `PRETTY_NAME`).
    pub name: String,
}

impl OsInfo {
    /// Create an OS description.
    pub fn new(id: OsId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
        }
    }

    /// The "nothing detected" result.
    pub fn unknown() -> Self {
        Self::new(OsId::Unknown, "Unknown")
    }
}

/// Detect the host OS from its platform identifier.
///
/// `platform_id` follows `std::env::consts::OS` naming; `darwin` and `win32`
/// are accepted as aliases.
pub fn detect_platform(platform_id: &str, probe: &dyn SystemProbe) -> OsInfo {
    match platform_id.to_lowercase().as_str() {
        "macos" | "darwin" => OsInfo::new(OsId::MacOs, "macOS"),
        "windows" | "win32" => OsInfo::new(OsId::Windows, "Windows"),
        "linux" => match probe.os_release() {
            Some(content) => parse_os_release(&content),
            None => {
                tracing::debug!("No os-release file, using generic Linux");
                OsInfo::new(OsId::Linux, "Linux")
            }
        },
        other => OsInfo::new(OsId::Unknown, other),
    }
}

/// Classify a Linux distribution from `os-release` content.
///
/// `ID` is matched first, then each `ID_LIKE` entry.
pub fn parse_os_release(content: &str) -> OsInfo {
    let mut id = None;
    let mut id_like = Vec::new();
    let mut pretty_name = None;
    let mut name = None;

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim().trim_matches('"').trim_matches('\'');
        match key.trim() {
            "ID" => id = Some(value.to_lowercase()),
            "ID_LIKE" => {
                id_like = value
                    .split_whitespace()
                    .map(|s| s.to_lowercase())
                    .collect()
            }
            "PRETTY_NAME" => pretty_name = Some(value.to_string()),
            "NAME" => name = Some(value.to_string()),
            _ => {}
        }
    }

    let display = pretty_name.or(name).unwrap_or_else(|| "Linux".to_string());

    let os_id = id
        .iter()
        .chain(id_like.iter())
        .find_map(|candidate| distro_family(candidate))
        .unwrap_or(OsId::Linux);

    OsInfo {
        id: os_id,
        name: display,
    }
}

fn distro_family(id: &str) -> Option<OsId> {
    match id {
        "ubuntu" | "debian" | "linuxmint" | "pop" => Some(OsId::Ubuntu),
        "fedora" => Some(OsId::Fedora),
        "rhel" | "centos" | "rocky" | "almalinux" => Some(OsId::Rhel),
        "arch" | "manjaro" | "endeavouros" => Some(OsId::Arch),
        _ => None,
    }
}
