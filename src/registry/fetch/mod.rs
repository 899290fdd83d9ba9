//! Remote sources: the template repository and the published version.
//!
//! - [`git`] - Shallow clone of the template repository
//! - [`http`] - Version descriptor lookup

pub mod git;
pub mod http;

pub use git::{GitFetcher, TemplateSource};
pub use http::{HttpFetcher, VersionSource};
