//! Client configuration and session credentials.
//!
//! The library itself never looks at the environment. The `from_env`
//! constructors exist for the `lanzou` binary.

use std::time::Duration;

/// Origin every provider script is resolved against.
pub const DEFAULT_HOST: &str = "https://pc.woozooo.com/";

/// The two session cookies the provider's web UI sets after login.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub ylogin: String,
    pub phpdisk_info: String,
}

impl Credentials {
    pub fn new(ylogin: impl Into<String>, phpdisk_info: impl Into<String>) -> Self {
        Self {
            ylogin: ylogin.into(),
            phpdisk_info: phpdisk_info.into(),
        }
    }

    /// Read `LANZOU_YLOGIN` and `LANZOU_PHPDISK_INFO`. Returns `None` if
    /// either is missing or empty.
    pub fn from_env() -> Option<Self> {
        let ylogin = std::env::var("LANZOU_YLOGIN").ok().filter(|v| !v.is_empty())?;
        let phpdisk_info = std::env::var("LANZOU_PHPDISK_INFO")
            .ok()
            .filter(|v| !v.is_empty())?;
        Some(Self::new(ylogin, phpdisk_info))
    }

    /// Value of the `Cookie` request header.
    pub(crate) fn cookie_header(&self) -> String {
        format!("ylogin={}; phpdisk_info={}", self.ylogin, self.phpdisk_info)
    }
}

// phpdisk_info is a session secret; keep it out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("ylogin", &self.ylogin)
            .field("phpdisk_info", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the script names are joined onto.
    pub base_url: String,
    /// Total per-request timeout. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_HOST.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Build a config from `LANZOU_HOST` and `LANZOU_TIMEOUT_SECS`, falling
    /// back to the defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let base_url = std::env::var("LANZOU_HOST").unwrap_or_else(|_| DEFAULT_HOST.into());
        let timeout = std::env::var("LANZOU_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        Self { base_url, timeout }
    }
}
