//! `SQLite` implementation of [`TicketRepository`].
//!
//! Tickets are stored with their spot number only; reads join the `parking`
//! table to rebuild the spot's type and current availability.

use std::future::Future;
use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use parkit_app::ports::TicketRepository;
use parkit_domain::error::ParkitError;
use parkit_domain::id::TicketId;
use parkit_domain::parking_spot::ParkingSpot;
use parkit_domain::parking_type::ParkingType;
use parkit_domain::ticket::Ticket;

use crate::error::StorageError;
use crate::{decode_spot_id, decode_time, encode_time};

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Ticket);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Ticket> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let parking_number: i64 = row.try_get("parking_number")?;
        let parking_type: String = row.try_get("type")?;
        let available: bool = row.try_get("available")?;
        let vehicle_reg_number: String = row.try_get("vehicle_reg_number")?;
        let price: f64 = row.try_get("price")?;
        let in_time: String = row.try_get("in_time")?;
        let out_time: Option<String> = row.try_get("out_time")?;
        let discount: bool = row.try_get("discount")?;

        let id = TicketId::from_str(&id).map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let parking_type = parking_type
            .parse::<ParkingType>()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;
        let parking_spot = ParkingSpot::new(decode_spot_id(parking_number)?, parking_type, available);

        Ok(Self(Ticket {
            id,
            parking_spot,
            vehicle_reg_number,
            price,
            in_time: decode_time(&in_time)?,
            out_time: out_time.as_deref().map(decode_time).transpose()?,
            discount,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO ticket (id, parking_number, vehicle_reg_number, price, in_time, out_time, discount)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_OPEN_BY_VEHICLE: &str = r"
    SELECT t.id, t.parking_number, p.type, p.available, t.vehicle_reg_number,
           t.price, t.in_time, t.out_time, t.discount
    FROM ticket t
    INNER JOIN parking p ON p.parking_number = t.parking_number
    WHERE t.vehicle_reg_number = ? AND t.out_time IS NULL
    ORDER BY t.in_time DESC
    LIMIT 1
";

const UPDATE: &str = "UPDATE ticket SET price = ?, out_time = ?, discount = ? WHERE id = ?";
const COUNT_BY_VEHICLE: &str = "SELECT COUNT(*) FROM ticket WHERE vehicle_reg_number = ?";

/// `SQLite`-backed ticket store.
pub struct SqliteTicketRepository {
    pool: SqlitePool,
}

impl SqliteTicketRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl TicketRepository for SqliteTicketRepository {
    fn create(&self, ticket: &Ticket) -> impl Future<Output = Result<bool, ParkitError>> + Send {
        let pool = self.pool.clone();
        let ticket = ticket.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(ticket.id.to_string())
                .bind(i64::from(ticket.parking_spot.id.get()))
                .bind(&ticket.vehicle_reg_number)
                .bind(ticket.price)
                .bind(encode_time(ticket.in_time))
                .bind(ticket.out_time.map(encode_time))
                .bind(ticket.discount)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() == 1)
        }
    }

    fn find_open_by_vehicle(
        &self,
        vehicle_reg_number: &str,
    ) -> impl Future<Output = Result<Option<Ticket>, ParkitError>> + Send {
        let pool = self.pool.clone();
        let vehicle_reg_number = vehicle_reg_number.to_string();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_OPEN_BY_VEHICLE)
                .bind(vehicle_reg_number)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn update(&self, ticket: &Ticket) -> impl Future<Output = Result<bool, ParkitError>> + Send {
        let pool = self.pool.clone();
        let id = ticket.id;
        let price = ticket.price;
        let out_time = ticket.out_time.map(encode_time);
        let discount = ticket.discount;
        async move {
            let result = sqlx::query(UPDATE)
                .bind(price)
                .bind(out_time)
                .bind(discount)
                .bind(id.to_string())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() == 1)
        }
    }

    fn count_by_vehicle(
        &self,
        vehicle_reg_number: &str,
    ) -> impl Future<Output = Result<u32, ParkitError>> + Send {
        let pool = self.pool.clone();
        let vehicle_reg_number = vehicle_reg_number.to_string();
        async move {
            let count: i64 = sqlx::query_scalar(COUNT_BY_VEHICLE)
                .bind(vehicle_reg_number)
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            let count = u32::try_from(count)
                .map_err(|err| StorageError::from(sqlx::Error::Decode(Box::new(err))))?;
            Ok(count)
        }
    }
}
