//! Reading the `version` field of a `package.json`.

use std::path::Path;

use serde::Deserialize;

/// The part of a package manifest devflow cares about.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: Option<String>,
}

/// Version declared in manifest JSON; `None` when absent, blank or malformed.
pub fn manifest_version(json: &str) -> Option<String> {
    serde_json::from_str::<PackageManifest>(json)
        .ok()
        .and_then(|manifest| manifest.version)
        .map(|version| version.trim().to_string())
        .filter(|version| !version.is_empty())
}

/// Version declared in the manifest at `path`; `None` when unreadable.
pub fn read_manifest_version(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => manifest_version(&content),
        Err(e) => {
            tracing::debug!("Cannot read {}: {}", path.display(), e);
            None
        }
    }
}
