//! Upstream service configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the Zaragoza open-data API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZaragozaConfig {
    /// Base URL shared by every transit endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-attempt timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total attempts per fetch, including the first
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Pause between failed attempts in milliseconds
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: u64,

    /// Rows requested from the tram stop listing
    #[serde(default = "default_stop_list_rows")]
    pub stop_list_rows: u32,

    /// User-Agent header sent upstream
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://www.zaragoza.es/sede/servicio/urbanismo-infraestructuras".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_backoff_ms() -> u64 {
    500
}

const fn default_stop_list_rows() -> u32 {
    100
}

fn default_user_agent() -> String {
    format!("zgz-transit/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ZaragozaConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
            stop_list_rows: default_stop_list_rows(),
            user_agent: default_user_agent(),
        }
    }
}

impl ZaragozaConfig {
    /// Create a configuration suitable for testing against a local mock
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            timeout_secs: 2,
            backoff_ms: 0,
            ..Default::default()
        }
    }

    /// Per-attempt timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Pause between failed attempts
    #[must_use]
    pub const fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.max_attempts == 0 {
            return Err("max_attempts must be greater than 0".to_string());
        }

        if self.stop_list_rows == 0 {
            return Err("stop_list_rows must be greater than 0".to_string());
        }

        Ok(())
    }
}
