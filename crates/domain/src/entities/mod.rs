//! Domain entities

mod arrival;
mod stop;

pub use arrival::{ArrivalRecord, ArrivalsOutcome, StopArrivals, stop_name_from_title};
pub use stop::{StopSummary, sort_by_name};
