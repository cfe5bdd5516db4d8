//! Transit queries understood by the proxy

use std::fmt;

use crate::value_objects::{PostId, TramStopId};

/// A single query against the upstream open-data API
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitQuery {
    /// Next buses at a post
    BusArrivals(PostId),
    /// All tram stops
    TramStopList,
    /// Next trams at a stop
    TramArrivals(TramStopId),
}

impl TransitQuery {
    /// Short snake_case name for logging
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::BusArrivals(_) => "bus_arrivals",
            Self::TramStopList => "tram_stop_list",
            Self::TramArrivals(_) => "tram_arrivals",
        }
    }
}

impl fmt::Display for TransitQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BusArrivals(post) => write!(f, "bus post {post}"),
            Self::TramStopList => write!(f, "tram stop list"),
            Self::TramArrivals(stop) => write!(f, "tram stop {stop}"),
        }
    }
}
