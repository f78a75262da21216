//! Fare calculation.
//!
//! The first half hour is free. Past that, the whole stay is billed at the
//! hourly rate of the spot's parking type, with a 5% reduction for recurring
//! users. Prices are not rounded.

use crate::error::{ParkitError, ValidationError};
use crate::parking_type::ParkingType;
use crate::ticket::Ticket;
use crate::time::hours_between;

/// Hourly rate for a car spot.
pub const CAR_RATE_PER_HOUR: f64 = 1.5;

/// Hourly rate for a bike spot.
pub const BIKE_RATE_PER_HOUR: f64 = 1.0;

/// Stays up to this many hours cost nothing.
pub const FREE_PARKING_HOURS: f64 = 0.5;

/// Multiplier applied to the price of a recurring user.
pub const DISCOUNT_RATE: f64 = 0.95;

/// Hourly rate for `parking_type`.
#[must_use]
pub fn rate_per_hour(parking_type: ParkingType) -> f64 {
    match parking_type {
        ParkingType::Car => CAR_RATE_PER_HOUR,
        ParkingType::Bike => BIKE_RATE_PER_HOUR,
    }
}

/// Stateless fare calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct FareCalculator;

impl FareCalculator {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Set `ticket.price` from its stay duration and parking type.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingOutTime`] when the ticket is still
    /// open, or [`ValidationError::OutTimeBeforeInTime`] when the out time
    /// precedes the in time. The price is left untouched on error.
    pub fn calculate_fare(
        &self,
        ticket: &mut Ticket,
        apply_discount: bool,
    ) -> Result<(), ParkitError> {
        let out_time = ticket.out_time.ok_or(ValidationError::MissingOutTime)?;
        if out_time < ticket.in_time {
            return Err(ValidationError::OutTimeBeforeInTime {
                in_time: ticket.in_time,
                out_time,
            }
            .into());
        }

        let duration = hours_between(ticket.in_time, out_time);
        if duration <= FREE_PARKING_HOURS {
            ticket.price = 0.0;
            return Ok(());
        }

        let mut price = duration * rate_per_hour(ticket.parking_spot.parking_type);
        if apply_discount {
            price *= DISCOUNT_RATE;
        }
        ticket.price = price;
        Ok(())
    }
}
