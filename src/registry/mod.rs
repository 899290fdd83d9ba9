//! Template and version sources.

pub mod fetch;

pub use fetch::{GitFetcher, HttpFetcher, TemplateSource, VersionSource};
