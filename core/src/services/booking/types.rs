//! Inputs accepted by the booking workflow

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reservation request for a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBooking {
    pub listing_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
}
