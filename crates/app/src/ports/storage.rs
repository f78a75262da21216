//! Storage port — repository traits for persistence.
//!
//! Writes return `Ok(false)` when the store accepted the call but did not
//! persist anything (e.g. no matching row). Adapter faults are `Err`.

use std::future::Future;

use parkit_domain::error::ParkitError;
use parkit_domain::id::SpotId;
use parkit_domain::parking_spot::ParkingSpot;
use parkit_domain::parking_type::ParkingType;
use parkit_domain::ticket::Ticket;

/// The facility's pool of [`ParkingSpot`]s.
pub trait ParkingSpotRepository {
    /// Number of the next free spot of `parking_type`, if any.
    fn next_available(
        &self,
        parking_type: ParkingType,
    ) -> impl Future<Output = Result<Option<SpotId>, ParkitError>> + Send;

    /// Get a spot by its number.
    fn get_by_id(
        &self,
        id: SpotId,
    ) -> impl Future<Output = Result<Option<ParkingSpot>, ParkitError>> + Send;

    /// Persist the spot's availability.
    fn update(&self, spot: &ParkingSpot) -> impl Future<Output = Result<bool, ParkitError>> + Send;
}

/// Repository for persisting and querying [`Ticket`]s.
pub trait TicketRepository {
    /// Persist a newly issued ticket.
    fn create(&self, ticket: &Ticket) -> impl Future<Output = Result<bool, ParkitError>> + Send;

    /// Most recent open ticket for a registration number.
    fn find_open_by_vehicle(
        &self,
        vehicle_reg_number: &str,
    ) -> impl Future<Output = Result<Option<Ticket>, ParkitError>> + Send;

    /// Persist the out time, price, and discount flag of an existing ticket.
    fn update(&self, ticket: &Ticket) -> impl Future<Output = Result<bool, ParkitError>> + Send;

    /// Number of tickets ever issued to a registration number.
    fn count_by_vehicle(
        &self,
        vehicle_reg_number: &str,
    ) -> impl Future<Output = Result<u32, ParkitError>> + Send;
}
