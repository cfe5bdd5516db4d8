//! Single-request HTTP transport
//!
//! One call to [`HttpTransport::get`] is one attempt: one connection, one
//! request, the whole body read before returning.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::ZaragozaConfig;
use crate::error::{FailureReason, ZaragozaError};

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Build a response from a status and a text body
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Performs one GET request
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET `url` and read the full body
    async fn get(&self, url: &str) -> Result<RawResponse, FailureReason>;
}

#[async_trait]
impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    async fn get(&self, url: &str) -> Result<RawResponse, FailureReason> {
        (**self).get(url).await
    }
}

/// reqwest-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout_secs: u64,
}

impl ReqwestTransport {
    /// Create a transport with the configured timeout and User-Agent
    ///
    /// Idle connections are not pooled, so every attempt opens its own
    /// connection and closes it once the body has been read or dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: &ZaragozaConfig) -> Result<Self, ZaragozaError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ZaragozaError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: config.timeout_secs,
        })
    }

    fn map_error(&self, err: &reqwest::Error) -> FailureReason {
        if err.is_timeout() {
            FailureReason::Timeout {
                timeout_secs: self.timeout_secs,
            }
        } else {
            FailureReason::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self))]
    async fn get(&self, url: &str) -> Result<RawResponse, FailureReason> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_error(&e))?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| self.map_error(&e))?;

        debug!(status, bytes = body.len(), "Upstream responded");
        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
