//! Application layer - Use cases and orchestration
//!
//! Turns stop identifiers into upstream URLs, fetches them through the
//! [`UpstreamFetchPort`], and normalizes the three upstream JSON shapes into
//! domain types. Adapters in the infrastructure layer implement the port.

pub mod endpoints;
pub mod error;
pub mod ports;
pub mod services;

pub use endpoints::UpstreamEndpoints;
pub use error::{ApplicationError, UpstreamResource};
pub use ports::*;
pub use services::*;
