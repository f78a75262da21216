//! # parkit-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `parkit-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations), which also seed
//!   the facility's spots: 1–3 for cars, 4–5 for bikes
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `parkit-app` (for port traits) and `parkit-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod parking_spot_repo;
pub mod pool;
pub mod ticket_repo;

pub use parking_spot_repo::SqliteParkingSpotRepository;
pub use pool::{Config, Database};
pub use ticket_repo::SqliteTicketRepository;

use parkit_domain::id::SpotId;
use parkit_domain::time::Timestamp;

/// Encode a timestamp as fixed-width RFC 3339 so stored values sort by time.
pub(crate) fn encode_time(ts: Timestamp) -> String {
    ts.to_rfc3339_opts(chrono::SecondsFormat::Micros, true)
}

pub(crate) fn decode_time(raw: &str) -> Result<Timestamp, sqlx::Error> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.to_utc())
        .map_err(|err| sqlx::Error::Decode(Box::new(err)))
}

pub(crate) fn decode_spot_id(raw: i64) -> Result<SpotId, sqlx::Error> {
    let number = u32::try_from(raw).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
    SpotId::new(number).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
