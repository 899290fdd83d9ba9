//! Dotted-numeric version comparison.

use std::cmp::Ordering;
use std::fmt;

/// Current version of devflow.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// An ordered list of numeric version components.
///
/// Missing trailing components compare as zero, so `1.0` and `1.0.0` are
/// equal. A leading `v` is ignored and each component is read up to its
/// first non-digit (`18.17.0-rc1` reads as `18.17.0`); a component with no
/// leading digits reads as zero.
#[derive(Debug, Clone)]
pub struct VersionTriple {
    parts: Vec<u64>,
}

impl VersionTriple {
    /// Parse a dot-delimited version string.
    pub fn parse(version: &str) -> Self {
        let trimmed = version.trim();
        let trimmed = trimmed
            .strip_prefix('v')
            .or_else(|| trimmed.strip_prefix('V'))
            .unwrap_or(trimmed);

        let parts = trimmed
            .split('.')
            .map(|component| {
                let digits: String = component
                    .trim()
                    .chars()
                    .take_while(char::is_ascii_digit)
                    .collect();
                digits.parse().unwrap_or(0)
            })
            .collect();

        Self { parts }
    }

    /// The major (first) component.
    pub fn major(&self) -> u64 {
        self.component(0)
    }

    /// Component at `index`, zero when absent.
    pub fn component(&self, index: usize) -> u64 {
        self.parts.get(index).copied().unwrap_or(0)
    }
}

impl PartialEq for VersionTriple {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for VersionTriple {}

impl PartialOrd for VersionTriple {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionTriple {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.parts.len().max(other.parts.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.parts.iter().map(u64::to_string).collect();
        write!(f, "{}", joined.join("."))
    }
}

/// Whether `remote` is strictly newer than `local`.
pub fn is_newer(remote: &str, local: &str) -> bool {
    VersionTriple::parse(remote) > VersionTriple::parse(local)
}
