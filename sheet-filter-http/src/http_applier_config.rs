use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use bon::Builder;

pub const BACKEND_URL_VAR: &str = "SHEET_FILTER_BACKEND_URL";
pub const TIMEOUT_SECS_VAR: &str = "SHEET_FILTER_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where and how to reach a remote apply-filter endpoint.
#[derive(Builder, Clone, Debug, PartialEq)]
pub struct HttpApplierConfig {
    /// Base url of the backend, without the `/apply-filter` path.
    #[builder(into)]
    pub base_url: String,
    #[builder(default = Duration::from_secs(DEFAULT_TIMEOUT_SECS))]
    pub timeout: Duration,
}

impl HttpApplierConfig {
    /// Reads [`BACKEND_URL_VAR`] (required) and [`TIMEOUT_SECS_VAR`].
    pub fn from_env() -> Result<Self> {
        from_values(env::var(BACKEND_URL_VAR).ok(), env::var(TIMEOUT_SECS_VAR).ok())
    }

    pub fn apply_filter_url(&self) -> String {
        format!("{}/apply-filter", self.base_url.trim_end_matches('/'))
    }
}

fn from_values(backend_url: Option<String>, timeout_secs: Option<String>) -> Result<HttpApplierConfig> {
    let base_url = backend_url
        .filter(|url| !url.trim().is_empty())
        .with_context(|| format!("{BACKEND_URL_VAR} is not set"))?;

    let timeout = timeout_secs
        .and_then(|s| s.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

    Ok(HttpApplierConfig { base_url, timeout })
}
