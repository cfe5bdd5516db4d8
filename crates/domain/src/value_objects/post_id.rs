//! Bus post identifier

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A bus post (poste) number, reduced to its digits
///
/// Users type post numbers by hand, so anything that is not an ASCII digit
/// is discarded before the id reaches the upstream URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PostId(String);

impl PostId {
    /// Parse a post id from raw user input, keeping only the digits
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidPostId`] if the input contains no digits.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(DomainError::InvalidPostId(raw.to_string()));
        }
        Ok(Self(digits))
    }

    /// The sanitized digits
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PostId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PostId> for String {
    fn from(id: PostId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_plain_digits() {
        let id = PostId::parse("716").unwrap();
        assert_eq!(id.as_str(), "716");
    }

    #[test]
    fn strips_trailing_letters() {
        let id = PostId::parse("12a").unwrap();
        assert_eq!(id.as_str(), "12");
    }

    #[test]
    fn strips_punctuation_and_whitespace() {
        let id = PostId::parse(" #7-1.6 ").unwrap();
        assert_eq!(id.as_str(), "716");
    }

    #[test]
    fn keeps_leading_zeros() {
        let id = PostId::parse("0042").unwrap();
        assert_eq!(id.as_str(), "0042");
    }

    #[test]
    fn rejects_input_without_digits() {
        let err = PostId::parse("abc").unwrap_err();
        assert_eq!(err, DomainError::InvalidPostId("abc".to_string()));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(PostId::parse("").is_err());
    }

    #[test]
    fn ignores_non_ascii_digits() {
        // Arabic-Indic digits are numeric but not part of the upstream id space
        assert!(PostId::parse("٧١٦").is_err());
    }

    #[test]
    fn display_shows_digits() {
        let id = PostId::parse("p-3").unwrap();
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    fn deserializes_through_sanitization() {
        let id: PostId = serde_json::from_str("\"12a\"").unwrap();
        assert_eq!(id.as_str(), "12");
        assert!(serde_json::from_str::<PostId>("\"xyz\"").is_err());
    }
}
