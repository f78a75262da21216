//! Storage-specific error type wrapping sqlx errors.

use parkit_domain::error::ParkitError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The connection URL could not be parsed into `SQLite` options.
    #[error("invalid database url")]
    InvalidUrl(#[source] sqlx::Error),

    /// A query, connection, or row decode failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for ParkitError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
