//! Remote version lookup over HTTP.
//!
//! The remote descriptor is a raw `package.json`. Every failure mode (network
//! error, non-success status, malformed body, missing field) collapses to an
//! unknown version.

use anyhow::{bail, Result};
use reqwest::blocking::Client;
use std::time::Duration;

use crate::updates::manifest_version;

/// Somewhere the latest published version can be looked up.
pub trait VersionSource: Sync {
    /// Latest version at `url`, or `None` when it cannot be determined.
    fn remote_version(&self, url: &str) -> Option<String>;
}

/// Fetches version descriptors over HTTP/HTTPS.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Create a new HTTP fetcher with default 30-second timeout.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(30))
    }

    /// Create a new HTTP fetcher with custom timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .user_agent(concat!("devflow/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, timeout }
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch a document body.
    pub fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?;

        if !response.status().is_success() {
            bail!("HTTP {} fetching {}", response.status(), url);
        }

        Ok(response.text()?)
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionSource for HttpFetcher {
    fn remote_version(&self, url: &str) -> Option<String> {
        match self.fetch(url) {
            Ok(body) => manifest_version(&body),
            Err(e) => {
                tracing::debug!("Remote version unavailable: {:#}", e);
                None
            }
        }
    }
}
