use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// A validated store identifier. External identifier strings must parse into
/// this before any lookup, so malformed input surfaces as a client error
/// (400) rather than a driver error, and is never confused with not-found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Checks the string against the store's native identifier format.
    /// No side effects.
    pub fn parse(input: &str) -> Option<Self> {
        Uuid::parse_str(input).ok().map(Self)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for RecordId {
    type Err = uuid::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(input).map(Self)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_identifiers() {
        let id = RecordId::parse("67f7d6a5-3c1e-4a8b-9d2f-0b1c2d3e4f5a");
        assert!(id.is_some());
    }

    #[test]
    fn rejects_too_short_input() {
        assert!(RecordId::parse("67f7d6a5").is_none());
    }

    #[test]
    fn rejects_non_hex_input() {
        assert!(RecordId::parse("zzzzzzzz-3c1e-4a8b-9d2f-0b1c2d3e4f5a").is_none());
    }

    #[test]
    fn rejects_empty_input() {
        assert!(RecordId::parse("").is_none());
    }

    #[test]
    fn round_trips_through_display() {
        let raw = "67f7d6a5-3c1e-4a8b-9d2f-0b1c2d3e4f5a";
        let id = RecordId::parse(raw).unwrap();
        assert_eq!(id.to_string(), raw);
    }
}
