//! Tram stop identifier

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A tram stop identifier as the upstream listing reports it
///
/// Unlike [`PostId`](super::PostId) the value is kept verbatim; tram ids are
/// chosen from the stop list rather than typed, so only emptiness is checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TramStopId(String);

impl TramStopId {
    /// Wrap a raw stop id
    ///
    /// # Errors
    /// Returns [`DomainError::MissingStopId`] if the id is empty.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::MissingStopId);
        }
        Ok(Self(raw.to_string()))
    }

    /// The raw id
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TramStopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TramStopId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TramStopId> for String {
    fn from(id: TramStopId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_id_verbatim() {
        let id = TramStopId::parse("1191").unwrap();
        assert_eq!(id.as_str(), "1191");
    }

    #[test]
    fn does_not_strip_non_digits() {
        // Bus post ids are sanitized, tram ids are not.
        let id = TramStopId::parse("12a").unwrap();
        assert_eq!(id.as_str(), "12a");
    }

    #[test]
    fn whitespace_only_is_kept() {
        let id = TramStopId::parse(" ").unwrap();
        assert_eq!(id.as_str(), " ");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(TramStopId::parse(""), Err(DomainError::MissingStopId));
    }
}
