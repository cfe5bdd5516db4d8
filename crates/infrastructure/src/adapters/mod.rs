//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod zaragoza_fetch_adapter;

pub use zaragoza_fetch_adapter::ZaragozaFetchAdapter;
