//! Configuration management for the client.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ratelimit::TimeUnit;

/// Main configuration for a [`crate::CrptClient`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API host, without the endpoint path
    pub base_url: String,

    /// Rate limiting configuration
    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    /// Total request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Rate limiting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// The window granularity
    #[serde(default = "default_unit")]
    pub unit: TimeUnit,

    /// Number of requests allowed per window
    #[serde(default = "default_requests_per_unit")]
    pub requests_per_unit: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
            requests_per_unit: default_requests_per_unit(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_unit() -> TimeUnit {
    TimeUnit::Second
}

fn default_requests_per_unit() -> u32 {
    10
}

impl ClientConfig {
    /// Create a configuration for a base URL with default rate limiting.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            rate_limit: RateLimitConfig::default(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Set the rate limit to `requests_per_unit` requests per `unit` window.
    pub fn with_rate_limit(mut self, unit: TimeUnit, requests_per_unit: u32) -> Self {
        self.rate_limit = RateLimitConfig {
            unit,
            requests_per_unit,
        };
        self
    }

    /// Load configuration from a YAML file.
    pub fn from_file(path: &str) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{path}: {e}")))?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: ClientConfig =
            serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the client cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::Config("base_url must not be empty".to_string()));
        }
        if self.rate_limit.requests_per_unit == 0 {
            return Err(Error::Config(
                "rate_limit.requests_per_unit must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
