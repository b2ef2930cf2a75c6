//! Client configuration baked in at build time.
//!
//! Optional:
//! - `HRMS_API_BASE_URL`: default `http://localhost:3000`
//! - `HRMS_REQUEST_TIMEOUT_SECS`: default 10
//! - `HRMS_LOG_LEVEL`: `error`..`trace`, default `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub request_timeout_secs: u64,
    pub log_level: log::Level,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl ClientConfig {
    /// Read the values captured by `option_env!` when the crate was built.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("HRMS_API_BASE_URL"),
            option_env!("HRMS_REQUEST_TIMEOUT_SECS"),
            option_env!("HRMS_LOG_LEVEL"),
        )
    }

    /// Build from raw values; blank or unparsable values fall back to the
    /// defaults.
    #[must_use]
    pub fn from_values(base_url: Option<&str>, timeout_secs: Option<&str>, log_level: Option<&str>) -> Self {
        let api_base_url = base_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let request_timeout_secs = timeout_secs
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        let log_level = log_level
            .and_then(|raw| log::Level::from_str(raw.trim()).ok())
            .unwrap_or(log::Level::Info);
        Self { api_base_url, request_timeout_secs, log_level }
    }

    /// Absolute URL for an API path such as `/api/auth/login`.
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}
