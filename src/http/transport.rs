//! Transport abstraction over the HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use crate::error::TransportError;

/// Status and body of one completed HTTP exchange
#[derive(Debug)]
pub struct RawResponse {
    pub status: u16,
    /// Body bytes, or the error hit while reading them
    pub body: Result<Bytes, TransportError>,
}

impl RawResponse {
    /// A response whose body was read successfully
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: Ok(body.into()),
        }
    }
}

/// Performs a single GET request
///
/// Implementations report connection-level failures as `Err` and any
/// response that arrived, whatever its status, as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError>;
}

/// [`Transport`] backed by a reqwest client
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport whose requests fail after `timeout`
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Wraps an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, TransportError> {
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();

        // Error bodies are never used
        if status >= 400 {
            return Ok(RawResponse::new(status, Bytes::new()));
        }

        let body = response.bytes().await.map_err(TransportError::from);
        Ok(RawResponse { status, body })
    }
}
