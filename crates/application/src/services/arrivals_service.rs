//! Arrivals service - normalizes upstream transit responses
//!
//! Each operation validates its input, builds the upstream URL, fetches it
//! through the [`UpstreamFetchPort`] and reshapes the JSON body into domain
//! types. Nothing is kept between calls.

use std::fmt;
use std::sync::Arc;

use domain::{
    ArrivalRecord, ArrivalsOutcome, PostId, StopSummary, TramStopId, TransitQuery,
    sort_by_name, stop_name_from_title,
};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::endpoints::UpstreamEndpoints;
use crate::error::{ApplicationError, UpstreamResource};
use crate::ports::UpstreamFetchPort;

/// Shown when a bus post has no upcoming arrivals
pub const NO_BUS_ARRIVALS_MESSAGE: &str = "Sin datos en este momento";
/// Shown when a tram stop has no upcoming arrivals
pub const NO_TRAM_ARRIVALS_MESSAGE: &str = "Sin tranvías en este momento";

/// Line shown when a bus entry has no `linea`
const UNKNOWN_BUS_LINE: &str = "?";
/// Line shown when a tram entry has no `linea`; the network has a single line
const DEFAULT_TRAM_LINE: &str = "L1";
/// Time shown when an entry has no arrival estimate
const UNKNOWN_TIME: &str = "?";

/// Scalar the upstream sends either quoted or bare
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawText {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl fmt::Display for RawText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Flag(b) => write!(f, "{b}"),
        }
    }
}

fn text(raw: Option<RawText>) -> Option<String> {
    raw.map(|r| r.to_string())
}

#[derive(Debug, Deserialize)]
struct RawBusPost {
    title: Option<RawText>,
    destinos: Option<Vec<RawBusDestination>>,
}

#[derive(Debug, Deserialize)]
struct RawBusDestination {
    linea: Option<RawText>,
    destino: Option<RawText>,
    primero: Option<RawText>,
    segundo: Option<RawText>,
}

#[derive(Debug, Deserialize)]
struct RawStopList {
    result: Vec<RawStop>,
}

#[derive(Debug, Deserialize)]
struct RawStop {
    #[serde(default)]
    id: Option<RawText>,
    title: Option<RawText>,
}

#[derive(Debug, Deserialize)]
struct RawTramStop {
    title: Option<RawText>,
    destinos: Option<Vec<RawTramDestination>>,
}

#[derive(Debug, Deserialize)]
struct RawTramDestination {
    linea: Option<RawText>,
    destino: Option<RawText>,
    minutos: Option<RawText>,
}

/// Application service for bus and tram queries
#[derive(Clone)]
pub struct ArrivalsService {
    upstream: Arc<dyn UpstreamFetchPort>,
    endpoints: UpstreamEndpoints,
}

impl fmt::Debug for ArrivalsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrivalsService")
            .field("endpoints", &self.endpoints)
            .finish_non_exhaustive()
    }
}

impl ArrivalsService {
    /// Create a new arrivals service
    pub fn new(upstream: Arc<dyn UpstreamFetchPort>, endpoints: UpstreamEndpoints) -> Self {
        Self {
            upstream,
            endpoints,
        }
    }

    /// Next buses at a post
    ///
    /// Non-digit characters in `raw_post` are dropped before the lookup.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::Validation`] if no digits remain,
    /// [`ApplicationError::UpstreamUnavailable`] if the upstream could not be
    /// reached or answered with an unexpected shape.
    #[instrument(skip(self))]
    pub async fn bus_arrivals(&self, raw_post: &str) -> Result<ArrivalsOutcome, ApplicationError> {
        let post = PostId::parse(raw_post)?;
        let raw: RawBusPost = self
            .query(TransitQuery::BusArrivals(post), UpstreamResource::BusArrivals)
            .await?;

        let title = text(raw.title).unwrap_or_default();
        let stop_name = stop_name_from_title(&title).to_string();

        let arrivals = raw
            .destinos
            .unwrap_or_default()
            .into_iter()
            .map(|d| ArrivalRecord {
                line: text(d.linea).unwrap_or_else(|| UNKNOWN_BUS_LINE.to_string()),
                destination: text(d.destino),
                first: text(d.primero).unwrap_or_else(|| UNKNOWN_TIME.to_string()),
                second: text(d.segundo),
            })
            .collect();

        Ok(ArrivalsOutcome::from_records(stop_name, arrivals))
    }

    /// All tram stops, sorted by name
    ///
    /// # Errors
    ///
    /// [`ApplicationError::UpstreamUnavailable`] if the upstream could not be
    /// reached or the body has no `result` list.
    #[instrument(skip(self))]
    pub async fn tram_stop_list(&self) -> Result<Vec<StopSummary>, ApplicationError> {
        let raw: RawStopList = self
            .query(TransitQuery::TramStopList, UpstreamResource::TramStopList)
            .await?;

        let mut stops: Vec<StopSummary> = raw
            .result
            .into_iter()
            .map(|s| StopSummary {
                id: text(s.id).unwrap_or_default(),
                name: text(s.title).unwrap_or_default(),
            })
            .collect();
        sort_by_name(&mut stops);

        debug!(count = stops.len(), "Loaded tram stops");
        Ok(stops)
    }

    /// Next trams at a stop
    ///
    /// `raw_stop` is used as given; it is not reduced to digits.
    ///
    /// # Errors
    ///
    /// [`ApplicationError::Validation`] if `raw_stop` is empty,
    /// [`ApplicationError::UpstreamUnavailable`] if the upstream could not be
    /// reached or answered with an unexpected shape.
    #[instrument(skip(self))]
    pub async fn tram_arrivals(
        &self,
        raw_stop: &str,
    ) -> Result<ArrivalsOutcome, ApplicationError> {
        let stop = TramStopId::parse(raw_stop)?;
        let raw: RawTramStop = self
            .query(TransitQuery::TramArrivals(stop), UpstreamResource::TramArrivals)
            .await?;

        let stop_name = text(raw.title).unwrap_or_default();

        let arrivals = raw
            .destinos
            .unwrap_or_default()
            .into_iter()
            .map(|d| ArrivalRecord {
                line: text(d.linea).unwrap_or_else(|| DEFAULT_TRAM_LINE.to_string()),
                destination: text(d.destino),
                first: text(d.minutos).unwrap_or_else(|| UNKNOWN_TIME.to_string()),
                second: None,
            })
            .collect();

        Ok(ArrivalsOutcome::from_records(stop_name, arrivals))
    }

    async fn query<T: DeserializeOwned>(
        &self,
        query: TransitQuery,
        resource: UpstreamResource,
    ) -> Result<T, ApplicationError> {
        let url = self.endpoints.url_for(&query);
        debug!(kind = query.kind(), %url, "Querying upstream");

        let Some(body) = self.upstream.fetch_json(&url).await else {
            warn!(%query, "Upstream unavailable");
            return Err(ApplicationError::UpstreamUnavailable(resource));
        };

        serde_json::from_value(body).map_err(|e| {
            warn!(%query, error = %e, "Unexpected upstream body");
            ApplicationError::UpstreamUnavailable(resource)
        })
    }
}
