//! Booking projection for API responses.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Booking, BookingStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingResponse {
    pub id: i64,
    pub listing_id: i64,
    pub user_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub guests: u32,
    pub status: BookingStatus,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Booking> for BookingResponse {
    fn from(booking: &Booking) -> Self {
        Self {
            id: booking.id,
            listing_id: booking.listing_id,
            user_id: booking.user_id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            nights: booking.nights(),
            guests: booking.guests,
            status: booking.status,
            total_price: booking.total_price,
            created_at: booking.created_at,
        }
    }
}
