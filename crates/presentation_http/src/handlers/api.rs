//! JSON API handlers
//!
//! Field names follow the Spanish wording the front end already uses.

use application::{NO_BUS_ARRIVALS_MESSAGE, NO_TRAM_ARRIVALS_MESSAGE};
use axum::{
    Json,
    extract::{Query, State},
};
use domain::{ArrivalRecord, ArrivalsOutcome, StopSummary};
use serde::{Deserialize, Serialize};

use super::{BusQuery, TramQuery};
use crate::{error::ApiError, state::AppState};

/// One bus line at a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusDestination {
    pub linea: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destino: Option<String>,
    pub primero: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segundo: Option<String>,
}

impl From<&ArrivalRecord> for BusDestination {
    fn from(record: &ArrivalRecord) -> Self {
        Self {
            linea: record.line.clone(),
            destino: record.destination.clone(),
            primero: record.first.clone(),
            segundo: record.second.clone(),
        }
    }
}

/// One tram line at a stop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TramDestination {
    pub linea: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destino: Option<String>,
    pub minutos: String,
}

impl From<&ArrivalRecord> for TramDestination {
    fn from(record: &ArrivalRecord) -> Self {
        Self {
            linea: record.line.clone(),
            destino: record.destination.clone(),
            minutos: record.first.clone(),
        }
    }
}

/// Arrival board for a stop
///
/// `mensaje` is only present when there are no arrivals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrivalsResponse<D> {
    pub parada: String,
    pub destinos: Vec<D>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
}

impl<D> ArrivalsResponse<D>
where
    D: for<'a> From<&'a ArrivalRecord>,
{
    fn from_outcome(outcome: &ArrivalsOutcome, empty_message: &str) -> Self {
        Self {
            parada: outcome.stop_name().to_string(),
            destinos: outcome.arrivals().iter().map(D::from).collect(),
            mensaje: outcome.is_empty().then(|| empty_message.to_string()),
        }
    }
}

/// Tram stop picker entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TramStopEntry {
    pub id: String,
    pub nombre: String,
}

impl From<StopSummary> for TramStopEntry {
    fn from(stop: StopSummary) -> Self {
        Self {
            id: stop.id,
            nombre: stop.name,
        }
    }
}

/// Next buses at a post
pub async fn bus_arrivals(
    State(state): State<AppState>,
    Query(query): Query<BusQuery>,
) -> Result<Json<ArrivalsResponse<BusDestination>>, ApiError> {
    let outcome = state.arrivals.bus_arrivals(&query.poste).await?;
    Ok(Json(ArrivalsResponse::from_outcome(
        &outcome,
        NO_BUS_ARRIVALS_MESSAGE,
    )))
}

/// All tram stops, sorted by name
pub async fn tram_stop_list(
    State(state): State<AppState>,
) -> Result<Json<Vec<TramStopEntry>>, ApiError> {
    let stops = state.arrivals.tram_stop_list().await?;
    Ok(Json(stops.into_iter().map(TramStopEntry::from).collect()))
}

/// Next trams at a stop
pub async fn tram_arrivals(
    State(state): State<AppState>,
    Query(query): Query<TramQuery>,
) -> Result<Json<ArrivalsResponse<TramDestination>>, ApiError> {
    let outcome = state.arrivals.tram_arrivals(&query.id).await?;
    Ok(Json(ArrivalsResponse::from_outcome(
        &outcome,
        NO_TRAM_ARRIVALS_MESSAGE,
    )))
}
