//! Main booking service implementation

use std::sync::Arc;

use crate::domain::entities::{Booking, StayPeriod, User};
use crate::domain::value_objects::{BookingResponse, Caller};
use crate::errors::{BookingError, DomainResult, UserError};
use crate::repositories::{BookingRepository, ListingRepository, UserRepository};

use super::config::BookingServiceConfig;
use super::types::CreateBooking;

/// Booking service for reserving listings
pub struct BookingService<U, L, B>
where
    U: UserRepository,
    L: ListingRepository,
    B: BookingRepository,
{
    user_repository: Arc<U>,
    listing_repository: Arc<L>,
    booking_repository: Arc<B>,
    config: BookingServiceConfig,
}

impl<U, L, B> BookingService<U, L, B>
where
    U: UserRepository,
    L: ListingRepository,
    B: BookingRepository,
{
    pub fn new(
        user_repository: Arc<U>,
        listing_repository: Arc<L>,
        booking_repository: Arc<B>,
        config: BookingServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            listing_repository,
            booking_repository,
            config,
        }
    }

    /// Reserve a listing for the caller
    ///
    /// Checks run in this order: caller exists, listing exists, date range,
    /// stay length, guest count, price, availability. The stored booking
    /// starts as PENDING and is priced at `nights * nightly_price`.
    ///
    /// # Returns
    ///
    /// * `Ok(BookingResponse)` - The stored booking
    /// * `Err(UserError::UserNotFound)` - The caller has no account
    /// * `Err(BookingError)` - Listing missing, bad range, stay too long,
    ///   too many guests, a price past `i64`, or the dates overlap another
    ///   active booking
    pub async fn create_booking(
        &self,
        request: CreateBooking,
        caller: &Caller,
    ) -> DomainResult<BookingResponse> {
        let user = self.require_user(caller).await?;

        let listing = self
            .listing_repository
            .find_by_id(request.listing_id)
            .await?
            .ok_or(BookingError::ListingNotFound {
                listing_id: request.listing_id,
            })?;

        let period = StayPeriod::new(request.check_in, request.check_out)?;
        if period.nights() > self.config.max_nights {
            return Err(BookingError::StayTooLong {
                max_nights: self.config.max_nights,
            }
            .into());
        }

        if !listing.accepts_guests(request.guests) {
            return Err(BookingError::GuestLimitExceeded {
                max: listing.max_guests,
            }
            .into());
        }

        let total_price = listing
            .price_for(period.nights())
            .ok_or(BookingError::PriceOutOfRange)?;

        if self
            .booking_repository
            .has_overlap(listing.id, &period)
            .await?
        {
            tracing::info!(listing_id = listing.id, "Booking rejected: dates unavailable");
            return Err(BookingError::DatesUnavailable.into());
        }

        let booking = Booking::new(user.id, listing.id, period, request.guests, total_price);
        let booking = self.booking_repository.create(booking).await?;

        tracing::info!(
            booking_id = booking.id,
            user_id = user.id,
            listing_id = listing.id,
            nights = period.nights(),
            "Booking created"
        );

        Ok(BookingResponse::from(&booking))
    }

    /// The caller's bookings, oldest first
    pub async fn list_my_bookings(&self, caller: &Caller) -> DomainResult<Vec<BookingResponse>> {
        let user = self.require_user(caller).await?;
        let bookings = self.booking_repository.find_by_user_id(user.id).await?;
        Ok(bookings.iter().map(BookingResponse::from).collect())
    }

    async fn require_user(&self, caller: &Caller) -> DomainResult<User> {
        self.user_repository
            .find_by_username(&caller.username)
            .await?
            .ok_or_else(|| UserError::UserNotFound.into())
    }
}
