//! HTML fragment handlers
//!
//! These always answer `200 OK`: validation and upstream failures are
//! rendered inline so the page can swap the fragment in unconditionally.

use axum::{
    extract::{Query, State},
    response::Html,
};

use super::{BusQuery, TramQuery};
use crate::{error::ApiError, state::AppState};

/// Bus arrival board
pub async fn bus_arrivals(
    State(state): State<AppState>,
    Query(query): Query<BusQuery>,
) -> Result<Html<String>, ApiError> {
    let html = match state.arrivals.bus_arrivals(&query.poste).await {
        Ok(outcome) => state.renderer.bus_arrivals(&outcome)?,
        Err(e) => state.renderer.error(&e.to_string())?,
    };
    Ok(Html(html))
}

/// Tram stop `<option>` list
pub async fn tram_stop_list(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let html = match state.arrivals.tram_stop_list().await {
        Ok(stops) => state.renderer.tram_stop_list(&stops)?,
        Err(e) => state.renderer.stop_list_error(&e.to_string())?,
    };
    Ok(Html(html))
}

/// Tram arrival board
pub async fn tram_arrivals(
    State(state): State<AppState>,
    Query(query): Query<TramQuery>,
) -> Result<Html<String>, ApiError> {
    let html = match state.arrivals.tram_arrivals(&query.id).await {
        Ok(outcome) => state.renderer.tram_arrivals(&outcome)?,
        Err(e) => state.renderer.error(&e.to_string())?,
    };
    Ok(Html(html))
}
