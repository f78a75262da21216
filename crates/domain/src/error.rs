//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`ParkitError`]
//! via `#[from]`. Adapter faults are boxed into [`ParkitError::Storage`] so the
//! domain never names an IO crate.

use crate::time::Timestamp;

/// Top-level error returned by domain and application operations.
#[derive(Debug, thiserror::Error)]
pub enum ParkitError {
    /// An argument or value violated a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// A looked-up record does not exist.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// No free spot of the requested type.
    #[error("parking slots might be full")]
    NoSpotAvailable,

    /// The store accepted the call but reported that nothing was written.
    #[error("persistence failure")]
    Persistence(#[from] PersistenceError),

    /// A storage adapter failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Reading user input failed.
    #[error("input error")]
    Input(#[from] std::io::Error),
}

/// Invariant violations, the "invalid argument" family.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("entered input is invalid: {0}")]
    InvalidSelection(i32),

    #[error("unknown parking type: {0}")]
    UnknownParkingType(String),

    #[error("parking spot number must be positive")]
    InvalidSpotId,

    #[error("vehicle registration number must not be empty")]
    EmptyRegistrationNumber,

    #[error("in time and out time must be provided")]
    MissingOutTime,

    #[error("out time must be after in time. In time: {in_time}, Out time: {out_time}")]
    OutTimeBeforeInTime {
        in_time: Timestamp,
        out_time: Timestamp,
    },

    #[error("ticket is already closed")]
    TicketAlreadyClosed,
}

/// A record identified by `id` was not found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

/// A write that the store reported as unsuccessful.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unable to update {entity} information: {id}")]
pub struct PersistenceError {
    pub entity: &'static str,
    pub id: String,
}
