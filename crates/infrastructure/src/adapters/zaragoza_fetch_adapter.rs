//! Zaragoza fetch adapter - Implements UpstreamFetchPort using integration_zaragoza

use application::error::ApplicationError;
use application::ports::UpstreamFetchPort;
use async_trait::async_trait;
use integration_zaragoza::{RetryingFetcher, ZaragozaConfig};
use serde_json::Value;
use tracing::instrument;

/// Adapter for the Zaragoza open-data API
pub struct ZaragozaFetchAdapter {
    fetcher: RetryingFetcher,
}

impl std::fmt::Debug for ZaragozaFetchAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZaragozaFetchAdapter")
            .field("fetcher", &"RetryingFetcher")
            .field("policy", &self.fetcher.policy())
            .finish()
    }
}

impl ZaragozaFetchAdapter {
    /// Create a new adapter from upstream configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn new(config: &ZaragozaConfig) -> Result<Self, ApplicationError> {
        let fetcher = RetryingFetcher::from_config(config)
            .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
        Ok(Self { fetcher })
    }
}

#[async_trait]
impl UpstreamFetchPort for ZaragozaFetchAdapter {
    #[instrument(skip(self))]
    async fn fetch_json(&self, url: &str) -> Option<Value> {
        self.fetcher.fetch(url).await
    }
}
