//! Upstream endpoint templates
//!
//! Paths are fixed per query kind; only the base URL and the stop list size
//! come from configuration.

use domain::TransitQuery;
use url::Url;

use crate::error::ApplicationError;

/// Builds upstream URLs for [`TransitQuery`] values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamEndpoints {
    base: Url,
    stop_list_rows: u32,
}

impl UpstreamEndpoints {
    /// Create endpoints under `base_url`
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::Configuration`] if `base_url` is not an
    /// absolute http(s) URL.
    pub fn new(base_url: &str, stop_list_rows: u32) -> Result<Self, ApplicationError> {
        let base = Url::parse(base_url)
            .map_err(|e| ApplicationError::Configuration(format!("invalid base_url: {e}")))?;

        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ApplicationError::Configuration(format!(
                "base_url must be an http(s) URL: {base_url}"
            )));
        }

        Ok(Self {
            base,
            stop_list_rows,
        })
    }

    /// Upstream URL for a query
    pub fn url_for(&self, query: &TransitQuery) -> String {
        match query {
            TransitQuery::BusArrivals(post) => self
                .join(&[
                    "transporte-urbano",
                    "poste-autobus",
                    &format!("tuzsa-{post}.json"),
                ])
                .into(),
            TransitQuery::TramStopList => {
                let mut url = self.join(&["transporte-urbano", "parada-tranvia.json"]);
                url.query_pairs_mut()
                    .append_pair("rows", &self.stop_list_rows.to_string());
                url.into()
            },
            // The raw id becomes one path segment; it is escaped, not sanitized.
            TransitQuery::TramArrivals(stop) => self
                .join(&[
                    "transporte-urbano",
                    "parada-tranvia",
                    &format!("{stop}.json"),
                ])
                .into(),
        }
    }

    fn join(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use domain::{PostId, TramStopId};

    use super::*;

    const BASE: &str = "https://www.zaragoza.es/sede/servicio/urbanismo-infraestructuras";

    fn endpoints() -> UpstreamEndpoints {
        UpstreamEndpoints::new(BASE, 100).unwrap()
    }

    #[test]
    fn bus_url_embeds_sanitized_id() {
        let query = TransitQuery::BusArrivals(PostId::parse("12a").unwrap());
        assert_eq!(
            endpoints().url_for(&query),
            format!("{BASE}/transporte-urbano/poste-autobus/tuzsa-12.json")
        );
    }

    #[test]
    fn stop_list_url_requests_rows() {
        assert_eq!(
            endpoints().url_for(&TransitQuery::TramStopList),
            format!("{BASE}/transporte-urbano/parada-tranvia.json?rows=100")
        );
    }

    #[test]
    fn stop_list_rows_is_configurable() {
        let endpoints = UpstreamEndpoints::new(BASE, 25).unwrap();
        assert!(endpoints.url_for(&TransitQuery::TramStopList).ends_with("?rows=25"));
    }

    #[test]
    fn tram_url_keeps_raw_id() {
        let query = TransitQuery::TramArrivals(TramStopId::parse("1191").unwrap());
        assert_eq!(
            endpoints().url_for(&query),
            format!("{BASE}/transporte-urbano/parada-tranvia/1191.json")
        );
    }

    #[test]
    fn tram_url_does_not_strip_letters() {
        let query = TransitQuery::TramArrivals(TramStopId::parse("12a").unwrap());
        assert!(endpoints().url_for(&query).ends_with("/parada-tranvia/12a.json"));
    }

    #[test]
    fn tram_id_cannot_escape_its_segment() {
        let query = TransitQuery::TramArrivals(TramStopId::parse("../x?y").unwrap());
        let url = endpoints().url_for(&query);
        assert!(url.starts_with(&format!("{BASE}/transporte-urbano/parada-tranvia/")));
        assert!(!url.contains('?'));
    }

    #[test]
    fn trailing_slash_in_base_is_tolerated() {
        let endpoints = UpstreamEndpoints::new("http://127.0.0.1:8080/", 100).unwrap();
        assert_eq!(
            endpoints.url_for(&TransitQuery::TramStopList),
            "http://127.0.0.1:8080/transporte-urbano/parada-tranvia.json?rows=100"
        );
    }

    #[test]
    fn rejects_invalid_base() {
        assert!(UpstreamEndpoints::new("not a url", 100).is_err());
        assert!(UpstreamEndpoints::new("mailto:someone@example.com", 100).is_err());
        assert!(UpstreamEndpoints::new("ftp://example.com", 100).is_err());
    }
}
