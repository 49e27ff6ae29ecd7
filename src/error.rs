//! Error types for the crpt-client crate.

use thiserror::Error;

use crate::ratelimit::TimeUnit;

/// Main error type for client operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The local request quota for the current time window is exhausted.
    ///
    /// Raised before any network activity; the caller decides whether to
    /// retry in a later window.
    #[error("request limit of {limit} per {unit} window exceeded")]
    RateLimitExceeded {
        /// The configured limit that was hit
        limit: u32,
        /// The window granularity the limit applies to
        unit: TimeUnit,
    },

    /// The remote API returned a non-2xx status with a decodable error body.
    #[error("API error {code}: {error_message}")]
    Api {
        /// Human-readable message from the API
        error_message: String,
        /// API-assigned error code
        code: String,
        /// Extended description of the failure
        description: String,
    },

    /// Network-level errors: connection, timeout, malformed URL
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A document or response body failed to encode or decode
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;
