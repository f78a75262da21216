//! Notifier port — what the attendant is shown.

use std::sync::Arc;

use parkit_domain::id::SpotId;
use parkit_domain::time::Timestamp;

/// A user-visible message.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    /// Ask which kind of vehicle is entering.
    VehicleTypePrompt,
    /// Ask for the registration number.
    RegistrationNumberPrompt,
    /// A ticket was issued and the vehicle may park.
    TicketIssued {
        spot_id: SpotId,
        vehicle_reg_number: String,
        in_time: Timestamp,
        recurring: bool,
    },
    /// The vehicle left and owes `price`.
    FareDue {
        vehicle_reg_number: String,
        price: f64,
        discount: bool,
        out_time: Timestamp,
    },
    /// The new ticket could not be saved; its spot stays occupied.
    TicketSaveFailed,
    /// The closed ticket could not be saved; the spot was not freed.
    TicketUpdateFailed,
    /// The spot's availability could not be written.
    SpotUpdateFailed,
}

/// Delivers [`Notice`]s to the user.
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notice: &Notice) {
        self.as_ref().notify(notice);
    }
}
