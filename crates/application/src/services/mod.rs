//! Application services (use case implementations)

mod arrivals_service;

pub use arrivals_service::{ArrivalsService, NO_BUS_ARRIVALS_MESSAGE, NO_TRAM_ARRIVALS_MESSAGE};
