//! Zaragoza client error types

use thiserror::Error;

/// Errors raised while setting up the client
#[derive(Debug, Error)]
pub enum ZaragozaError {
    /// The HTTP client could not be built
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Why a single fetch attempt did not produce a usable body
///
/// Every variant is transient from the fetcher's point of view; the reason is
/// only kept for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// Connection, TLS, or body transfer failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The attempt exceeded its timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// Any status other than 200
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The body is not JSON
    #[error("Body is not valid JSON: {0}")]
    Decode(String),

    /// `200 OK` whose JSON object carries an `error` key
    #[error("Upstream reported an error: {0}")]
    EmbeddedError(String),
}
