//! Zaragoza open-data transit integration
//!
//! Fetches JSON documents from the municipal open-data API
//! (`www.zaragoza.es/sede/servicio/urbanismo-infraestructuras`) that backs the
//! bus post and tram stop arrival boards.
//!
//! # Architecture
//!
//! The upstream is flaky: requests time out, return 5xx, or answer `200 OK`
//! with an `{"error": ...}` body. [`RetryingFetcher`] hides this behind a single
//! `fetch(url)` call that retries a fixed number of times with a fixed pause.
//! The network and the pause are injected through [`HttpTransport`] and
//! [`Sleeper`], implemented for production by [`ReqwestTransport`] and
//! [`TokioSleeper`].
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_zaragoza::{RetryingFetcher, ZaragozaConfig};
//!
//! let fetcher = RetryingFetcher::from_config(&ZaragozaConfig::default())?;
//! let body = fetcher
//!     .fetch("https://www.zaragoza.es/sede/servicio/urbanismo-infraestructuras/transporte-urbano/parada-tranvia.json?rows=100")
//!     .await;
//! ```

mod config;
mod error;
mod fetcher;
mod sleeper;
mod transport;

pub use config::ZaragozaConfig;
pub use error::{FailureReason, ZaragozaError};
pub use fetcher::{AttemptOutcome, FetchOutcome, FetchPolicy, RetryingFetcher, classify_response};
pub use sleeper::{Sleeper, TokioSleeper};
pub use transport::{HttpTransport, RawResponse, ReqwestTransport};
