//! Booking entity and the stay period it covers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::BookingError;

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Awaiting host confirmation
    Pending,
    Confirmed,
    /// Cancelled bookings no longer block their dates
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }

    /// Whether a booking in this status occupies its dates
    pub fn blocks_dates(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(BookingStatus::Pending),
            "CONFIRMED" => Ok(BookingStatus::Confirmed),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            _ => Err(format!("Unknown booking status: {}", s)),
        }
    }
}

/// Half-open date range `[check_in, check_out)`
///
/// The check-out day itself is free, so a stay ending on the 5th does not
/// overlap one starting on the 5th.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayPeriod {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayPeriod {
    /// Builds a period, rejecting ranges shorter than one night
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange);
        }
        Ok(Self { check_in, check_out })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights, always at least one
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

/// A reservation of a listing by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Store-assigned identifier, `0` before persistence
    pub id: i64,

    /// Guest who made the booking
    pub user_id: i64,

    pub listing_id: i64,

    pub check_in: NaiveDate,

    pub check_out: NaiveDate,

    pub guests: u32,

    pub status: BookingStatus,

    /// Price for the whole stay in minor currency units
    pub total_price: i64,

    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a pending booking for `period`
    pub fn new(
        user_id: i64,
        listing_id: i64,
        period: StayPeriod,
        guests: u32,
        total_price: i64,
    ) -> Self {
        Self {
            id: 0,
            user_id,
            listing_id,
            check_in: period.check_in(),
            check_out: period.check_out(),
            guests,
            status: BookingStatus::Pending,
            total_price,
            created_at: Utc::now(),
        }
    }

    /// The stay covered by this booking
    pub fn period(&self) -> StayPeriod {
        StayPeriod {
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }

    pub fn nights(&self) -> i64 {
        self.period().nights()
    }

    /// Whether this booking keeps `period` from being booked again
    pub fn conflicts_with(&self, period: &StayPeriod) -> bool {
        self.status.blocks_dates() && self.period().overlaps(period)
    }
}
