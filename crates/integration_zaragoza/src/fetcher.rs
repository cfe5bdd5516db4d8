//! Fixed-backoff retrying fetcher
//!
//! Each attempt is classified once, by [`classify_response`], into an
//! [`AttemptOutcome`]. A small state machine then decides
//! whether to stop with a [`FetchOutcome`] or pause and try again.

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::config::ZaragozaConfig;
use crate::error::{FailureReason, ZaragozaError};
use crate::sleeper::{Sleeper, TokioSleeper};
use crate::transport::{HttpTransport, RawResponse, ReqwestTransport};

/// Attempt budget and pause
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchPolicy {
    /// Total attempts, including the first (never less than 1)
    pub max_attempts: u32,
    /// Fixed pause after each failed attempt except the last
    pub backoff: Duration,
}

impl FetchPolicy {
    /// Create a policy; zero attempts is raised to one
    #[must_use]
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(500))
    }
}

impl From<&ZaragozaConfig> for FetchPolicy {
    fn from(config: &ZaragozaConfig) -> Self {
        Self::new(config.max_attempts, config.backoff())
    }
}

/// Result of a single attempt
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptOutcome {
    /// Status 200, JSON body, no `error` key
    Success(Value),
    /// Anything else; eligible for another attempt
    RetryableFailure(FailureReason),
}

/// Result of a whole fetch
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// An attempt succeeded
    Success {
        /// Decoded body
        body: Value,
        /// Attempts used, including the successful one
        attempts: u32,
    },
    /// Every attempt failed
    ExhaustedFailure {
        /// Attempts made
        attempts: u32,
        /// Reason the final attempt failed
        last_failure: FailureReason,
    },
}

impl FetchOutcome {
    /// Number of attempts made
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Success { attempts, .. } | Self::ExhaustedFailure { attempts, .. } => *attempts,
        }
    }

    /// The body on success, `None` once retries are exhausted
    pub fn into_body(self) -> Option<Value> {
        match self {
            Self::Success { body, .. } => Some(body),
            Self::ExhaustedFailure { .. } => None,
        }
    }
}

/// Classify the result of one transport call
///
/// This is the single place where the upstream's `200 OK` + `{"error": ...}`
/// convention is recognised.
pub fn classify_response(result: Result<RawResponse, FailureReason>) -> AttemptOutcome {
    let response = match result {
        Ok(response) => response,
        Err(reason) => return AttemptOutcome::RetryableFailure(reason),
    };

    if response.status != 200 {
        return AttemptOutcome::RetryableFailure(FailureReason::Status(response.status));
    }

    match serde_json::from_slice::<Value>(&response.body) {
        Err(e) => AttemptOutcome::RetryableFailure(FailureReason::Decode(e.to_string())),
        Ok(Value::Object(map)) => {
            if let Some(error) = map.get("error") {
                return AttemptOutcome::RetryableFailure(FailureReason::EmbeddedError(
                    error.to_string(),
                ));
            }
            AttemptOutcome::Success(Value::Object(map))
        },
        Ok(other) => AttemptOutcome::Success(other),
    }
}

/// What the loop does after an attempt
#[derive(Debug)]
enum Transition {
    Finish(FetchOutcome),
    Retry(FailureReason),
}

/// Attempt counter for one fetch
#[derive(Debug)]
struct FetchState {
    attempt: u32,
    max_attempts: u32,
}

impl FetchState {
    const fn new(policy: &FetchPolicy) -> Self {
        Self {
            attempt: 0,
            max_attempts: policy.max_attempts,
        }
    }

    fn begin_attempt(&mut self) -> u32 {
        self.attempt += 1;
        self.attempt
    }

    fn advance(&self, outcome: AttemptOutcome) -> Transition {
        match outcome {
            AttemptOutcome::Success(body) => Transition::Finish(FetchOutcome::Success {
                body,
                attempts: self.attempt,
            }),
            AttemptOutcome::RetryableFailure(reason) if self.attempt >= self.max_attempts => {
                Transition::Finish(FetchOutcome::ExhaustedFailure {
                    attempts: self.attempt,
                    last_failure: reason,
                })
            },
            AttemptOutcome::RetryableFailure(reason) => Transition::Retry(reason),
        }
    }
}

/// Fetches JSON from the upstream with a bounded number of attempts
///
/// Dropping the future returned by [`Self::fetch`] cancels the in-flight
/// request or pending pause; no further attempts are made.
#[derive(Debug, Clone)]
pub struct RetryingFetcher<T = ReqwestTransport, S = TokioSleeper> {
    transport: T,
    sleeper: S,
    policy: FetchPolicy,
}

impl RetryingFetcher {
    /// Create a reqwest-backed fetcher from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn from_config(config: &ZaragozaConfig) -> Result<Self, ZaragozaError> {
        config
            .validate()
            .map_err(ZaragozaError::ConfigurationError)?;
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(transport, TokioSleeper, FetchPolicy::from(config)))
    }
}

impl<T: HttpTransport, S: Sleeper> RetryingFetcher<T, S> {
    /// Assemble a fetcher from its parts
    pub const fn new(transport: T, sleeper: S, policy: FetchPolicy) -> Self {
        Self {
            transport,
            sleeper,
            policy,
        }
    }

    /// The attempt policy in use
    pub const fn policy(&self) -> FetchPolicy {
        self.policy
    }

    /// Fetch `url`, returning the body or `None` after exhausting attempts
    pub async fn fetch(&self, url: &str) -> Option<Value> {
        self.fetch_outcome(url).await.into_body()
    }

    /// Fetch `url` and report how it went
    #[instrument(skip(self), fields(max_attempts = self.policy.max_attempts))]
    pub async fn fetch_outcome(&self, url: &str) -> FetchOutcome {
        let mut state = FetchState::new(&self.policy);

        loop {
            let attempt = state.begin_attempt();
            let outcome = classify_response(self.transport.get(url).await);

            match state.advance(outcome) {
                Transition::Finish(done) => {
                    match &done {
                        FetchOutcome::Success { attempts, .. } => {
                            debug!(attempts, "Upstream fetch succeeded");
                        },
                        FetchOutcome::ExhaustedFailure {
                            attempts,
                            last_failure,
                        } => {
                            warn!(attempts, error = %last_failure, "Upstream fetch failed after all attempts");
                        },
                    }
                    return done;
                },
                Transition::Retry(reason) => {
                    warn!(
                        attempt,
                        backoff_ms = u64::try_from(self.policy.backoff.as_millis()).unwrap_or(u64::MAX),
                        error = %reason,
                        "Upstream attempt failed, retrying"
                    );
                    self.sleeper.sleep(self.policy.backoff).await;
                },
            }
        }
    }
}
