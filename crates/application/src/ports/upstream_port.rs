//! Upstream fetch port
//!
//! Defines how the application reaches the open-data API. Retries, timeouts
//! and the classification of embedded upstream errors live behind this trait.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use serde_json::Value;

/// Port for fetching decoded JSON from the upstream API
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpstreamFetchPort: Send + Sync {
    /// Fetch `url` and return its decoded body
    ///
    /// Returns `None` once every attempt has failed. A body that decoded but
    /// carried an upstream error marker counts as a failure.
    async fn fetch_json(&self, url: &str) -> Option<Value>;
}
