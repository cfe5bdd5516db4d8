//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A bus post identifier contained no digits
    #[error("Invalid post id: {0:?}")]
    InvalidPostId(String),

    /// A tram stop identifier was empty
    #[error("Missing tram stop id")]
    MissingStopId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_post_id_message_quotes_input() {
        let err = DomainError::InvalidPostId("abc".to_string());
        assert_eq!(err.to_string(), "Invalid post id: \"abc\"");
    }

    #[test]
    fn missing_stop_id_message() {
        assert_eq!(DomainError::MissingStopId.to_string(), "Missing tram stop id");
    }
}
