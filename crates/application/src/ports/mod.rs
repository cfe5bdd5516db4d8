//! Port definitions (interfaces for adapters)
//!
//! Ports define the boundaries between the application and the outside
//! world. Infrastructure adapters implement these traits.

mod upstream_port;

#[cfg(test)]
pub use upstream_port::MockUpstreamFetchPort;
pub use upstream_port::UpstreamFetchPort;
