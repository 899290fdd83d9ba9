//! Host environment detection.
//!
//! - [`detection`] - Operating system family detection

pub mod detection;

pub use detection::{detect_platform, parse_os_release, OsId, OsInfo};
