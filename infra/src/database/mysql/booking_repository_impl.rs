//! MySQL implementation of the BookingRepository trait.
//!
//! Availability is re-checked inside the insert transaction while the
//! listing row is locked, so two concurrent requests for overlapping dates
//! cannot both succeed.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{MySqlPool, Row};

use hs_core::domain::entities::{Booking, BookingStatus, StayPeriod};
use hs_core::errors::{BookingError, DomainError};
use hs_core::repositories::BookingRepository;

use super::errors::{column, query_failed};

const OVERLAP_QUERY: &str = r#"
    SELECT COUNT(*) AS total
    FROM bookings
    WHERE listing_id = ?
      AND status <> 'CANCELLED'
      AND check_in < ?
      AND ? < check_out
"#;

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &sqlx::mysql::MySqlRow) -> Result<Booking, DomainError> {
        let status: String = row.try_get("status").map_err(|e| column("status", e))?;

        Ok(Booking {
            id: row.try_get("id").map_err(|e| column("id", e))?,
            user_id: row.try_get("user_id").map_err(|e| column("user_id", e))?,
            listing_id: row.try_get("listing_id").map_err(|e| column("listing_id", e))?,
            check_in: row
                .try_get::<NaiveDate, _>("check_in")
                .map_err(|e| column("check_in", e))?,
            check_out: row
                .try_get::<NaiveDate, _>("check_out")
                .map_err(|e| column("check_out", e))?,
            guests: row.try_get("guests").map_err(|e| column("guests", e))?,
            status: status
                .parse::<BookingStatus>()
                .map_err(DomainError::Database)?,
            total_price: row
                .try_get("total_price")
                .map_err(|e| column("total_price", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
        })
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn create(&self, mut booking: Booking) -> Result<Booking, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| query_failed("begin transaction", e))?;

        // serializes bookings per listing until commit
        let listing = sqlx::query("SELECT id FROM listings WHERE id = ? FOR UPDATE")
            .bind(booking.listing_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| query_failed("lock listing", e))?;

        if listing.is_none() {
            return Err(BookingError::ListingNotFound {
                listing_id: booking.listing_id,
            }
            .into());
        }

        let row = sqlx::query(OVERLAP_QUERY)
            .bind(booking.listing_id)
            .bind(booking.check_out)
            .bind(booking.check_in)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| query_failed("check availability", e))?;

        let overlapping: i64 = row.try_get("total").map_err(|e| column("total", e))?;
        if overlapping > 0 {
            return Err(BookingError::DatesUnavailable.into());
        }

        let result = sqlx::query(
            r#"
            INSERT INTO bookings (
                user_id, listing_id, check_in, check_out, guests,
                status, total_price, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.user_id)
        .bind(booking.listing_id)
        .bind(booking.check_in)
        .bind(booking.check_out)
        .bind(booking.guests)
        .bind(booking.status.as_str())
        .bind(booking.total_price)
        .bind(booking.created_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| query_failed("create booking", e))?;

        tx.commit()
            .await
            .map_err(|e| query_failed("commit booking", e))?;

        booking.id = result.last_insert_id() as i64;
        Ok(booking)
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Booking>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, listing_id, check_in, check_out, guests,
                   status, total_price, created_at
            FROM bookings
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("list bookings", e))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn has_overlap(&self, listing_id: i64, period: &StayPeriod) -> Result<bool, DomainError> {
        let row = sqlx::query(OVERLAP_QUERY)
            .bind(listing_id)
            .bind(period.check_out())
            .bind(period.check_in())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("check availability", e))?;

        let overlapping: i64 = row.try_get("total").map_err(|e| column("total", e))?;
        Ok(overlapping > 0)
    }
}
