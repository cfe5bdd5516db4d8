//! Domain layer for the Zaragoza transit proxy
//!
//! Contains the stop identifiers, arrival records, and stop listings that the
//! rest of the workspace speaks in. This layer has no I/O and no knowledge of
//! the upstream JSON shapes.

pub mod entities;
pub mod errors;
pub mod query;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use query::TransitQuery;
pub use value_objects::*;
