//! Numeric artist identifier shared by all four remote collections.
//!
//! The remote API keys artists, locations, dates and relations by the
//! same positive integer. The zero value never appears on the wire and is
//! reserved for the "no such artist" case produced by the join.

use serde::{Deserialize, Serialize};

/// Errors produced when parsing a caller-supplied identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is not an unsigned integer.
    #[error("artist id is not an integer: {0:?}")]
    NotANumber(String),

    /// The input parsed to zero, which no artist carries.
    #[error("artist id must be positive")]
    Zero,
}

/// Identifier joining an [`Artist`](crate::Artist) to its locations,
/// dates and relations.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ArtistId(pub u32);

impl ArtistId {
    /// Parse a caller-supplied identifier, rejecting anything that is not
    /// a positive integer.
    pub fn parse(input: &str) -> Result<Self, IdError> {
        let value: u32 = input
            .parse()
            .map_err(|_e| IdError::NotANumber(input.to_owned()))?;
        if value == 0 {
            return Err(IdError::Zero);
        }
        Ok(Self(value))
    }

    /// Whether this identifier refers to a real artist.
    pub const fn is_known(self) -> bool {
        self.0 != 0
    }

    /// Return the inner integer value.
    pub const fn into_inner(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ArtistId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ArtistId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<ArtistId> for u32 {
    fn from(id: ArtistId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_positive_integers() {
        assert_eq!(ArtistId::parse("1"), Ok(ArtistId(1)));
        assert_eq!(ArtistId::parse("52"), Ok(ArtistId(52)));
    }

    #[test]
    fn parse_rejects_zero() {
        assert_eq!(ArtistId::parse("0"), Err(IdError::Zero));
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "abc", "-3", "1.5", " 7", "99999999999"] {
            assert!(
                matches!(ArtistId::parse(input), Err(IdError::NotANumber(_))),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn default_is_unknown() {
        assert!(!ArtistId::default().is_known());
        assert!(ArtistId(3).is_known());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ArtistId(9)).unwrap_or_default();
        assert_eq!(json, "9");
    }
}
