//! Application-level errors
//!
//! The display text of each variant is the message shown to riders.

use domain::DomainError;
use thiserror::Error;

/// Upstream resource a failed query was after
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamResource {
    /// Bus post arrivals
    BusArrivals,
    /// Tram stop listing
    TramStopList,
    /// Tram stop arrivals
    TramArrivals,
}

impl UpstreamResource {
    /// Message shown when the resource could not be fetched
    pub const fn unavailable_message(self) -> &'static str {
        match self {
            Self::BusArrivals => {
                "No se pudo obtener info. Comprueba el número o intenta de nuevo."
            },
            Self::TramStopList => "Error cargando paradas",
            Self::TramArrivals => "No se pudo obtener tiempos. Intenta de nuevo.",
        }
    }
}

/// Errors that can occur in the application layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Input rejected before any upstream call
    #[error("{0}")]
    Validation(String),

    /// Retries exhausted or the upstream body had an unexpected shape
    #[error("{}", .0.unavailable_message())]
    UpstreamUnavailable(UpstreamResource),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidPostId(_) => {
                Self::Validation("Introduce un número de poste válido".to_string())
            },
            DomainError::MissingStopId => Self::Validation("Falta ID de parada".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_post_id_maps_to_validation() {
        let err: ApplicationError = DomainError::InvalidPostId("abc".to_string()).into();
        assert_eq!(
            err,
            ApplicationError::Validation("Introduce un número de poste válido".to_string())
        );
    }

    #[test]
    fn missing_stop_id_maps_to_validation() {
        let err: ApplicationError = DomainError::MissingStopId.into();
        assert_eq!(err.to_string(), "Falta ID de parada");
    }

    #[test]
    fn unavailable_messages() {
        assert_eq!(
            ApplicationError::UpstreamUnavailable(UpstreamResource::BusArrivals).to_string(),
            "No se pudo obtener info. Comprueba el número o intenta de nuevo."
        );
        assert_eq!(
            ApplicationError::UpstreamUnavailable(UpstreamResource::TramStopList).to_string(),
            "Error cargando paradas"
        );
        assert_eq!(
            ApplicationError::UpstreamUnavailable(UpstreamResource::TramArrivals).to_string(),
            "No se pudo obtener tiempos. Intenta de nuevo."
        );
    }

    #[test]
    fn configuration_message() {
        let err = ApplicationError::Configuration("bad url".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad url");
    }
}
