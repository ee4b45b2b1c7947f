//! Configuration for the completion endpoint connection.

use nexus_core::RetryPolicy;
use nexus_error::{ConfigError, ConfigErrorKind};
use std::time::Duration;

/// Endpoint used when `NEXUS_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.groq.com/v1/generate";

/// Configuration for the completion endpoint connection.
#[derive(Debug, Clone, PartialEq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct NexusConfig {
    /// Endpoint URL the dispatcher POSTs to
    api_url: String,
    /// Bearer token for the `Authorization` header
    api_key: String,
    /// Retry policy applied to every request
    #[builder(default)]
    retry: RetryPolicy,
}

impl NexusConfig {
    /// Create config from environment variables
    ///
    /// Reads:
    /// - `NEXUS_API_URL` (default: the Groq generate endpoint)
    /// - `NEXUS_API_KEY` (required)
    /// - `NEXUS_MAX_RETRIES` (optional)
    /// - `NEXUS_BASE_BACKOFF_MS` (optional)
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url =
            std::env::var("NEXUS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_key = std::env::var("NEXUS_API_KEY")
            .map_err(|_| ConfigError::new(ConfigErrorKind::MissingApiKey))?;

        let defaults = RetryPolicy::default();
        let max_retries = match std::env::var("NEXUS_MAX_RETRIES") {
            Ok(raw) => parse_var("NEXUS_MAX_RETRIES", &raw)?,
            Err(_) => *defaults.max_retries(),
        };
        let base_backoff = match std::env::var("NEXUS_BASE_BACKOFF_MS") {
            Ok(raw) => Duration::from_millis(parse_var("NEXUS_BASE_BACKOFF_MS", &raw)?),
            Err(_) => *defaults.base_backoff(),
        };

        Ok(NexusConfigBuilder::default()
            .api_url(api_url)
            .api_key(api_key)
            .retry(RetryPolicy::new(max_retries, base_backoff))
            .build()
            .expect("Valid NexusConfig"))
    }
}

fn parse_var<T: std::str::FromStr>(var: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| {
        ConfigError::new(ConfigErrorKind::InvalidValue {
            var: var.to_string(),
            value: raw.to_string(),
        })
    })
}
