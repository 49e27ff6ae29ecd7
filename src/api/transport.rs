//! Transport trait for abstracting the HTTP layer.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// A raw HTTP response, reduced to what response classification needs.
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    /// Whether the status code is in the 2xx family.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for transport implementations.
///
/// This trait abstracts over the real `HttpTransport` and test doubles so
/// the client can be exercised without a network.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST a JSON body to `url` and return the raw response.
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse>;
}

/// Transport backed by a [`reqwest::Client`].
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with the given total request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<RawResponse> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(RawResponse { status, body })
    }
}
