//! Arrival records and the per-stop arrival board

use serde::{Deserialize, Serialize};

/// Marker the upstream appends to bus post titles before the line list
const LINES_MARKER: &str = " Líneas:";

/// One line's next arrival time(s) at a stop
///
/// Times are kept as text: the upstream mixes minute counts with phrases
/// such as "En la parada".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalRecord {
    /// Line name (e.g. "Ci1", "L1")
    pub line: String,
    /// Destination headsign, when reported
    pub destination: Option<String>,
    /// Next arrival, minutes or free text
    pub first: String,
    /// Following arrival, when reported
    pub second: Option<String>,
}

/// Arrivals for a single stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopArrivals {
    /// Human-readable stop name
    pub stop_name: String,
    /// Arrivals in upstream order
    pub arrivals: Vec<ArrivalRecord>,
}

/// Result of an arrivals query that reached the upstream successfully
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArrivalsOutcome {
    /// At least one arrival is known
    Arrivals(StopArrivals),
    /// The stop exists but nothing is scheduled right now
    NoArrivals {
        /// Human-readable stop name
        stop_name: String,
    },
}

impl ArrivalsOutcome {
    /// Build an outcome, choosing [`Self::NoArrivals`] for an empty list
    pub fn from_records(stop_name: String, arrivals: Vec<ArrivalRecord>) -> Self {
        if arrivals.is_empty() {
            Self::NoArrivals { stop_name }
        } else {
            Self::Arrivals(StopArrivals {
                stop_name,
                arrivals,
            })
        }
    }

    /// Stop name for either variant
    pub fn stop_name(&self) -> &str {
        match self {
            Self::Arrivals(board) => &board.stop_name,
            Self::NoArrivals { stop_name } => stop_name,
        }
    }

    /// Arrivals, empty for [`Self::NoArrivals`]
    pub fn arrivals(&self) -> &[ArrivalRecord] {
        match self {
            Self::Arrivals(board) => &board.arrivals,
            Self::NoArrivals { .. } => &[],
        }
    }

    /// Whether this is the empty outcome
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::NoArrivals { .. })
    }
}

/// Extract the stop name from a bus post title
///
/// Titles look like `"(716) Pº Pamplona Líneas: Ci1, 42"`; everything before
/// the first `" Líneas:"` is the stop name. Titles without the marker are
/// returned unchanged.
pub fn stop_name_from_title(title: &str) -> &str {
    title
        .split_once(LINES_MARKER)
        .map_or(title, |(name, _)| name)
}
