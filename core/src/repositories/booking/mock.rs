//! Mock implementation of BookingRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Booking, StayPeriod};
use crate::errors::{BookingError, DomainError};

use super::trait_::BookingRepository;

/// Mock booking repository for testing
pub struct MockBookingRepository {
    bookings: Arc<RwLock<Vec<Booking>>>,
}

impl MockBookingRepository {
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Snapshot of every stored booking
    pub async fn all(&self) -> Vec<Booking> {
        self.bookings.read().await.clone()
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn overlaps(bookings: &[Booking], listing_id: i64, period: &StayPeriod) -> bool {
    bookings
        .iter()
        .any(|b| b.listing_id == listing_id && b.conflicts_with(period))
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn create(&self, mut booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;

        if overlaps(&bookings, booking.listing_id, &booking.period()) {
            return Err(BookingError::DatesUnavailable.into());
        }

        booking.id = bookings.len() as i64 + 1;
        bookings.push(booking.clone());
        Ok(booking)
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn has_overlap(&self, listing_id: i64, period: &StayPeriod) -> Result<bool, DomainError> {
        let bookings = self.bookings.read().await;
        Ok(overlaps(&bookings, listing_id, period))
    }
}
