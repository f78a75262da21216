//! Ticket — one parking visit, from entry to exit.
//!
//! A ticket is created **open** (no out time, price zero) when a vehicle enters
//! and **closed** exactly once when it leaves. Closed tickets are not reopened.

use serde::{Deserialize, Serialize};

use crate::error::{ParkitError, ValidationError};
use crate::id::TicketId;
use crate::parking_spot::ParkingSpot;
use crate::time::{Timestamp, now};

/// A single parking visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub parking_spot: ParkingSpot,
    pub vehicle_reg_number: String,
    pub price: f64,
    pub in_time: Timestamp,
    pub out_time: Option<Timestamp>,
    pub discount: bool,
}

impl Ticket {
    /// Create a builder for constructing a [`Ticket`].
    #[must_use]
    pub fn builder() -> TicketBuilder {
        TicketBuilder::default()
    }

    /// Whether the vehicle is still parked.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.out_time.is_none()
    }

    /// Record the exit time, moving the ticket to its closed state.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::TicketAlreadyClosed`] if an out time is
    /// already set, or [`ValidationError::OutTimeBeforeInTime`] if `out_time`
    /// precedes the entry.
    pub fn close(&mut self, out_time: Timestamp) -> Result<(), ParkitError> {
        if !self.is_open() {
            return Err(ValidationError::TicketAlreadyClosed.into());
        }
        if out_time < self.in_time {
            return Err(ValidationError::OutTimeBeforeInTime {
                in_time: self.in_time,
                out_time,
            }
            .into());
        }
        self.out_time = Some(out_time);
        Ok(())
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ParkitError::Validation`] when the registration number is
    /// empty or the out time precedes the in time.
    pub fn validate(&self) -> Result<(), ParkitError> {
        if self.vehicle_reg_number.trim().is_empty() {
            return Err(ValidationError::EmptyRegistrationNumber.into());
        }
        if let Some(out_time) = self.out_time
            && out_time < self.in_time
        {
            return Err(ValidationError::OutTimeBeforeInTime {
                in_time: self.in_time,
                out_time,
            }
            .into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`Ticket`].
#[derive(Debug, Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    parking_spot: Option<ParkingSpot>,
    vehicle_reg_number: Option<String>,
    price: f64,
    in_time: Option<Timestamp>,
    out_time: Option<Timestamp>,
    discount: bool,
}

impl TicketBuilder {
    #[must_use]
    pub fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn parking_spot(mut self, parking_spot: ParkingSpot) -> Self {
        self.parking_spot = Some(parking_spot);
        self
    }

    #[must_use]
    pub fn vehicle_reg_number(mut self, vehicle_reg_number: impl Into<String>) -> Self {
        self.vehicle_reg_number = Some(vehicle_reg_number.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    #[must_use]
    pub fn in_time(mut self, in_time: Timestamp) -> Self {
        self.in_time = Some(in_time);
        self
    }

    #[must_use]
    pub fn out_time(mut self, out_time: Timestamp) -> Self {
        self.out_time = Some(out_time);
        self
    }

    #[must_use]
    pub fn discount(mut self, discount: bool) -> Self {
        self.discount = discount;
        self
    }

    /// Consume the builder, validate, and return a [`Ticket`].
    ///
    /// `in_time` defaults to now.
    ///
    /// # Errors
    ///
    /// Returns [`ParkitError::Validation`] if the registration number is
    /// missing or empty, the out time precedes the in time, or no parking
    /// spot was given ([`ValidationError::InvalidSpotId`]).
    pub fn build(self) -> Result<Ticket, ParkitError> {
        let parking_spot = self.parking_spot.ok_or(ValidationError::InvalidSpotId)?;
        let ticket = Ticket {
            id: self.id.unwrap_or_default(),
            parking_spot,
            vehicle_reg_number: self.vehicle_reg_number.unwrap_or_default(),
            price: self.price,
            in_time: self.in_time.unwrap_or_else(now),
            out_time: self.out_time,
            discount: self.discount,
        };
        ticket.validate()?;
        Ok(ticket)
    }
}
