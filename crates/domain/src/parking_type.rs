//! Parking type — the kind of vehicle a spot accepts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ParkitError, ValidationError};

/// Kind of vehicle a spot is sized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ParkingType {
    Car,
    Bike,
}

impl ParkingType {
    /// Map a vehicle-type menu selection (`1` car, `2` bike).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidSelection`] for any other value.
    pub fn from_selection(selection: i32) -> Result<Self, ParkitError> {
        match selection {
            1 => Ok(Self::Car),
            2 => Ok(Self::Bike),
            other => Err(ValidationError::InvalidSelection(other).into()),
        }
    }

    /// Stored text form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Car => "CAR",
            Self::Bike => "BIKE",
        }
    }
}

impl fmt::Display for ParkingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParkingType {
    type Err = ParkitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CAR" => Ok(Self::Car),
            "BIKE" => Ok(Self::Bike),
            other => Err(ValidationError::UnknownParkingType(other.to_string()).into()),
        }
    }
}
