//! Value Objects - Immutable, identity-less domain primitives

mod post_id;
mod tram_stop_id;

pub use post_id::PostId;
pub use tram_stop_id::TramStopId;
