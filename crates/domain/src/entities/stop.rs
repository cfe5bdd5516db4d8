//! Tram stop listing entries

use serde::{Deserialize, Serialize};

/// A tram stop as offered in the stop picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopSummary {
    /// Upstream stop id, used for arrival queries
    pub id: String,
    /// Display name
    pub name: String,
}

/// Sort stops ascending by name
///
/// Plain byte-wise string order, so "Z" sorts before "a". The sort is stable
/// but callers must not rely on the order of equal names.
pub fn sort_by_name(stops: &mut [StopSummary]) {
    stops.sort_by(|a, b| a.name.cmp(&b.name));
}
