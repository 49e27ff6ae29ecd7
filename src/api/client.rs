//! Document submission client.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::document::{CreateDocumentRequest, CreateDocumentResponse, Document, ErrorResponse};
use super::transport::{HttpTransport, Transport};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::ratelimit::WindowRateLimiter;

/// Path of the create-document endpoint, appended to the base URL.
const CREATE_DOCUMENT_ENDPOINT: &str = "/api/v3/lk/documents/create";

/// Client for the CRPT document API.
///
/// Every submission first passes the shared [`WindowRateLimiter`]; rejected
/// calls perform no serialization or network work. Exactly one request is
/// sent per `submit` call, with no internal retries.
pub struct CrptClient {
    /// Full URL of the create-document endpoint
    create_document_url: String,
    /// Admission gate shared by all callers of this client
    limiter: Arc<WindowRateLimiter>,
    /// HTTP layer, swappable for tests
    transport: Box<dyn Transport>,
}

impl CrptClient {
    /// Create a client from configuration, using the real HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(Duration::from_secs(config.timeout_secs))?;
        Ok(Self::with_transport(config, Box::new(transport)))
    }

    /// Create a client with a custom transport implementation.
    pub fn with_transport(config: ClientConfig, transport: Box<dyn Transport>) -> Self {
        let limiter = Arc::new(WindowRateLimiter::new(
            config.rate_limit.unit,
            config.rate_limit.requests_per_unit,
        ));
        Self {
            create_document_url: format!("{}{}", config.base_url, CREATE_DOCUMENT_ENDPOINT),
            limiter,
            transport,
        }
    }

    /// Submit a goods introduction document with its detached signature.
    ///
    /// Returns the identifier the API assigned to the created document.
    /// The rate limiter counts the attempt before the request is sent, so a
    /// submission the remote API rejects still consumes local quota.
    pub async fn submit(&self, document: &Document, signature: &str) -> Result<String> {
        self.limiter.permit()?;

        let product_document = serde_json::to_string(document)?;
        let envelope = CreateDocumentRequest {
            product_document,
            signature: signature.to_string(),
        };
        let body = serde_json::to_string(&envelope)?;

        debug!(url = %self.create_document_url, "Submitting document");
        let response = self.transport.post_json(&self.create_document_url, body).await?;

        if !response.is_success() {
            debug!(status = response.status, "API returned an error status");
            let error: ErrorResponse = serde_json::from_str(&response.body)?;
            return Err(Error::Api {
                error_message: error.error_message,
                code: error.code,
                description: error.description,
            });
        }

        let decoded: CreateDocumentResponse = serde_json::from_str(&response.body)?;
        info!(document_id = %decoded.value, "Document created");
        Ok(decoded.value)
    }

    /// Get the rate limiter shared by this client's callers.
    pub fn limiter(&self) -> &WindowRateLimiter {
        &self.limiter
    }
}
