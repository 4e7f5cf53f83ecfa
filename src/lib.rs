//! Nacosleak - Nacos Authentication Bypass Scanner
//!
//! This library probes Nacos configuration-management servers for known
//! authentication-bypass vulnerabilities and exports every configuration
//! item reachable through the authenticated console API.
//!
//! # Warning
//! This tool is designed for ethical penetration testing and security
//! assessment purposes only. Users are responsible for ensuring they have
//! proper authorization before scanning any servers.

pub mod auth_check;
pub mod cli;
pub mod config;
pub mod display;
pub mod export;
pub mod probe;
pub mod scanner;
pub mod utils;
pub mod error;

pub use error::{Result, ScanError};

/// Common types used throughout the application
pub mod types {
    use crate::auth_check::BypassTechnique;
    use crate::error::ScanError;
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use std::fmt;
    use url::Url;

    /// A scan target: a normalized base URL pointing at a Nacos console.
    ///
    /// Trailing slashes are stripped so `http://host:8848/` and
    /// `http://host:8848` address the same server.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Target {
        base_url: String,
        host_dir: String,
    }

    impl Target {
        pub fn parse(raw: &str) -> crate::Result<Self> {
            let trimmed = raw.trim();
            let base = trimmed.trim_end_matches('/');

            let url = Url::parse(base)
                .map_err(|e| ScanError::InvalidTarget(format!("{}: {}", base, e)))?;

            match url.scheme() {
                "http" | "https" => {}
                other => {
                    return Err(ScanError::InvalidTarget(format!(
                        "{}: unsupported scheme '{}'",
                        base, other
                    )))
                }
            }

            let host = url
                .host_str()
                .ok_or_else(|| ScanError::InvalidTarget(format!("{}: missing host", base)))?;

            let host_dir = match url.port() {
                Some(port) => format!("{}_{}", host, port),
                None => host.to_string(),
            };

            Ok(Self {
                base_url: base.to_string(),
                host_dir,
            })
        }

        /// Base URL without a trailing slash, e.g. `http://10.0.0.5:8848`.
        pub fn base_url(&self) -> &str {
            &self.base_url
        }

        /// Filesystem-safe `host_port` segment used for the export directory.
        pub fn host_dir(&self) -> &str {
            &self.host_dir
        }
    }

    impl fmt::Display for Target {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.base_url)
        }
    }

    /// A confirmed authentication bypass on a single target.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Finding {
        pub target: String,
        pub technique: BypassTechnique,
        pub discovered_at: DateTime<Utc>,
    }

    impl Finding {
        pub fn new(target: impl Into<String>, technique: BypassTechnique) -> Self {
            Self {
                target: target.into(),
                technique,
                discovered_at: Utc::now(),
            }
        }
    }
}
