//! Client configuration
//!
//! The endpoint comes from `ML_MODEL_URL` once at startup and is then passed
//! around as a plain value; nothing below this point reads the environment.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the prediction endpoint URL
pub const ENDPOINT_ENV: &str = "ML_MODEL_URL";

/// Prediction client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Absolute URL the query is POSTed to
    pub endpoint: String,
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    /// Create configuration for `endpoint`
    ///
    /// # Errors
    /// - `ConfigError::MissingEndpoint` for an empty string
    /// - `ConfigError::InvalidEndpoint` if it is not an absolute http(s) URL
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        let endpoint = endpoint.into();
        check_endpoint(&endpoint)?;
        Ok(Self {
            endpoint,
            timeout: None,
        })
    }

    /// With request timeout
    #[inline]
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Read from the process environment
    ///
    /// # Errors
    /// See [`ClientConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through an arbitrary key lookup
    ///
    /// # Errors
    /// `ConfigError::MissingEndpoint` when `ML_MODEL_URL` is unset or blank,
    /// `ConfigError::InvalidEndpoint` when it does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup(ENDPOINT_ENV).unwrap_or_default();
        Self::new(endpoint.trim())
    }
}

fn check_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    if endpoint.trim().is_empty() {
        return Err(ConfigError::MissingEndpoint);
    }

    let url = Url::parse(endpoint).map_err(|e| ConfigError::InvalidEndpoint {
        url: endpoint.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No endpoint configured
    #[error("no prediction endpoint configured (set ML_MODEL_URL)")]
    MissingEndpoint,

    /// Endpoint is not a usable URL
    #[error("invalid prediction endpoint '{url}': {reason}")]
    InvalidEndpoint {
        /// Rejected value
        url: String,
        /// Parser message
        reason: String,
    },
}
