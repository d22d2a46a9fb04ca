//! Booking repository trait defining the interface for booking persistence.

use async_trait::async_trait;

use crate::domain::entities::{Booking, StayPeriod};
use crate::errors::DomainError;

/// Repository trait for Booking entity persistence operations
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persist a new booking
    ///
    /// Implementations must re-check availability atomically with the insert
    /// and fail with `BookingError::DatesUnavailable` when another
    /// non-cancelled booking on the same listing overlaps the stay.
    ///
    /// # Returns
    /// * `Ok(Booking)` - The stored booking carrying its assigned id
    /// * `Err(DomainError)` - Conflict or storage failure
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError>;

    /// Bookings made by `user_id`, oldest first
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<Booking>, DomainError>;

    /// Whether a non-cancelled booking on `listing_id` overlaps `period`
    async fn has_overlap(&self, listing_id: i64, period: &StayPeriod) -> Result<bool, DomainError>;
}
