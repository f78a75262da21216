//! `SQLite` implementation of [`ParkingSpotRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use parkit_app::ports::ParkingSpotRepository;
use parkit_domain::error::ParkitError;
use parkit_domain::id::SpotId;
use parkit_domain::parking_spot::ParkingSpot;
use parkit_domain::parking_type::ParkingType;

use crate::decode_spot_id;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`ParkingSpot`].
struct Wrapper(ParkingSpot);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<ParkingSpot> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let parking_number: i64 = row.try_get("parking_number")?;
        let parking_type: String = row.try_get("type")?;
        let available: bool = row.try_get("available")?;

        let id = decode_spot_id(parking_number)?;
        let parking_type = parking_type
            .parse::<ParkingType>()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(ParkingSpot::new(id, parking_type, available)))
    }
}

const SELECT_NEXT_AVAILABLE: &str = r"
    SELECT parking_number FROM parking
    WHERE available = 1 AND type = ?
    ORDER BY parking_number
    LIMIT 1
";
const SELECT_BY_ID: &str = "SELECT * FROM parking WHERE parking_number = ?";
const UPDATE: &str = "UPDATE parking SET available = ? WHERE parking_number = ?";

/// `SQLite`-backed spot pool.
pub struct SqliteParkingSpotRepository {
    pool: SqlitePool,
}

impl SqliteParkingSpotRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ParkingSpotRepository for SqliteParkingSpotRepository {
    fn next_available(
        &self,
        parking_type: ParkingType,
    ) -> impl Future<Output = Result<Option<SpotId>, ParkitError>> + Send {
        let pool = self.pool.clone();
        async move {
            let number: Option<i64> = sqlx::query_scalar(SELECT_NEXT_AVAILABLE)
                .bind(parking_type.as_str())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            let id = number
                .map(decode_spot_id)
                .transpose()
                .map_err(StorageError::from)?;
            Ok(id)
        }
    }

    fn get_by_id(
        &self,
        id: SpotId,
    ) -> impl Future<Output = Result<Option<ParkingSpot>, ParkitError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(i64::from(id.get()))
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn update(&self, spot: &ParkingSpot) -> impl Future<Output = Result<bool, ParkitError>> + Send {
        let pool = self.pool.clone();
        let id = spot.id;
        let available = spot.available;
        async move {
            let result = sqlx::query(UPDATE)
                .bind(available)
                .bind(i64::from(id.get()))
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() == 1)
        }
    }
}
