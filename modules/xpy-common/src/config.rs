use std::env;
use std::time::Duration;

use url::Url;

use crate::error::{Result, XpyError};

/// Timeout applied to every dispatched request unless overridden.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(1000);

/// Client configuration loaded from environment variables.
///
/// Every field is optional in the environment; `Config::default()` carries
/// the values used when nothing is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base for relative request URIs (`/admin/files` and friends).
    pub base_url: Option<Url>,
    pub request_timeout: Duration,
    pub disable_cache: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            disable_cache: true,
        }
    }
}

impl Config {
    /// Load configuration from the process environment, reading `.env` first.
    ///
    /// Env vars:
    /// - `XPY_BASE_URL` — base for relative URIs
    /// - `XPY_REQUEST_TIMEOUT_MS` — request timeout in milliseconds (default 1000)
    /// - `XPY_DISABLE_CACHE` — append cache-busting params (default true)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self::from_lookup(|key| env::var(key).ok())?;
        tracing::info!(
            base_url = config.base_url.as_ref().map(Url::as_str).unwrap_or("<not set>"),
            timeout_ms = config.request_timeout.as_millis() as u64,
            disable_cache = config.disable_cache,
            "Config loaded"
        );
        Ok(config)
    }

    /// Build a config from an arbitrary key lookup. Unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let base_url = match non_empty(lookup("XPY_BASE_URL")) {
            Some(raw) => Some(
                Url::parse(&raw)
                    .map_err(|e| XpyError::Config(format!("XPY_BASE_URL is not a URL: {e}")))?,
            ),
            None => None,
        };

        let request_timeout = match non_empty(lookup("XPY_REQUEST_TIMEOUT_MS")) {
            Some(raw) => Duration::from_millis(raw.trim().parse().map_err(|_| {
                XpyError::Config(format!("XPY_REQUEST_TIMEOUT_MS must be a number, got {raw:?}"))
            })?),
            None => defaults.request_timeout,
        };

        let disable_cache = match non_empty(lookup("XPY_DISABLE_CACHE")) {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                XpyError::Config(format!("XPY_DISABLE_CACHE must be true or false, got {raw:?}"))
            })?,
            None => defaults.disable_cache,
        };

        Ok(Self {
            base_url,
            request_timeout,
            disable_cache,
        })
    }
}

fn non_empty(val: Option<String>) -> Option<String> {
    val.filter(|s| !s.trim().is_empty())
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
