//! Client configuration: base URL, per-call timeout and optional bearer credential.
//!
//! Values are fixed once a client is built.

use crate::{Error, ErrorContext, Result};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:9000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_BASE_URL: &str = "AIMESH_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "AIMESH_TIMEOUT_SECS";
pub const ENV_API_KEY: &str = "AIMESH_API_KEY";

#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Applied to each call as a whole (connect, send, and body read).
    pub timeout: Duration,
    /// Sent as `Authorization: Bearer <api_key>` when present.
    pub api_key: Option<String>,
}

impl ClientConfig {
    /// Defaults overridden by `AIMESH_BASE_URL`, `AIMESH_TIMEOUT_SECS` and `AIMESH_API_KEY`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL).filter(|s| !s.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            let secs = raw.trim().parse::<u64>().map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid timeout: {}", e),
                    ErrorContext::new()
                        .with_field_path(ENV_TIMEOUT_SECS)
                        .with_details(raw.clone())
                        .with_source("env"),
                )
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        config.api_key = lookup(ENV_API_KEY).filter(|s| !s.is_empty());
        Ok(config)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            api_key: None,
        }
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
