//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the upstream fetch adapter, configuration loading and the HTML
//! fragment renderer.

pub mod adapters;
pub mod config;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, LogFormat, ServerConfig};
pub use templates::{FragmentRenderer, TemplateError};
