//! Listing entity. Read-only in this service; listings are managed elsewhere.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An accommodation offering
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,

    /// Owning host's user id
    pub host_id: i64,

    pub title: String,

    pub address: String,

    pub thumbnail_url: Option<String>,

    /// Price per night in minor currency units
    pub nightly_price: i64,

    /// Maximum number of guests per booking
    pub max_guests: u32,

    pub created_at: DateTime<Utc>,
}

impl Listing {
    /// Total price for a stay of `nights` nights, `None` on overflow
    pub fn price_for(&self, nights: i64) -> Option<i64> {
        self.nightly_price.checked_mul(nights)
    }

    /// Whether `guests` fits the listing's capacity
    pub fn accepts_guests(&self, guests: u32) -> bool {
        guests >= 1 && guests <= self.max_guests
    }
}
