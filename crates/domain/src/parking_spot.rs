//! Parking spot — a numbered place in the facility.

use serde::{Deserialize, Serialize};

use crate::id::SpotId;
use crate::parking_type::ParkingType;

/// A physical spot. Identity is the spot number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingSpot {
    pub id: SpotId,
    pub parking_type: ParkingType,
    pub available: bool,
}

impl ParkingSpot {
    #[must_use]
    pub fn new(id: SpotId, parking_type: ParkingType, available: bool) -> Self {
        Self {
            id,
            parking_type,
            available,
        }
    }

    /// Mark the spot as taken by a vehicle.
    pub fn occupy(&mut self) {
        self.available = false;
    }

    /// Mark the spot as free again.
    pub fn release(&mut self) {
        self.available = true;
    }
}
