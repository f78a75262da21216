//! Typed identifiers.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParkitError, ValidationError};

/// Unique identifier for a [`Ticket`](crate::ticket::Ticket).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(uuid::Uuid);

impl TicketId {
    /// Generate a new random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TicketId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s).map(Self)
    }
}

/// Number painted on a parking spot. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SpotId(NonZeroU32);

impl SpotId {
    /// Wrap a spot number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSpotId`] when `number` is zero.
    pub fn new(number: u32) -> Result<Self, ParkitError> {
        NonZeroU32::new(number)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidSpotId.into())
    }

    /// The spot number.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for SpotId {
    type Error = ParkitError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SpotId> for u32 {
    fn from(id: SpotId) -> Self {
        id.get()
    }
}

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_unique_ids_when_called_twice() {
        let a = TicketId::new();
        let b = TicketId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn should_roundtrip_through_display_and_from_str() {
        let id = TicketId::new();
        let parsed: TicketId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_return_error_when_parsing_invalid_uuid() {
        let result = TicketId::from_str("not-a-uuid");
        assert!(result.is_err());
    }

    #[test]
    fn should_accept_positive_spot_number() {
        let id = SpotId::new(4).unwrap();
        assert_eq!(id.get(), 4);
        assert_eq!(id.to_string(), "4");
    }

    #[test]
    fn should_reject_zero_spot_number() {
        let result = SpotId::new(0);
        assert!(matches!(
            result,
            Err(ParkitError::Validation(ValidationError::InvalidSpotId))
        ));
    }

    #[test]
    fn should_reject_zero_spot_number_from_json() {
        let result: Result<SpotId, _> = serde_json::from_str("0");
        assert!(result.is_err());
    }
}
