//! Input port — answers typed by the attendant.

use std::future::Future;
use std::sync::Arc;

use parkit_domain::error::ParkitError;

/// Source of menu selections and registration numbers.
pub trait InputReader {
    /// Read a numeric menu selection.
    fn read_selection(&self) -> impl Future<Output = Result<i32, ParkitError>> + Send;

    /// Read a vehicle registration number.
    fn read_vehicle_registration_number(
        &self,
    ) -> impl Future<Output = Result<String, ParkitError>> + Send;
}

impl<T: InputReader + Send + Sync> InputReader for Arc<T> {
    fn read_selection(&self) -> impl Future<Output = Result<i32, ParkitError>> + Send {
        self.as_ref().read_selection()
    }

    fn read_vehicle_registration_number(
        &self,
    ) -> impl Future<Output = Result<String, ParkitError>> + Send {
        self.as_ref().read_vehicle_registration_number()
    }
}
