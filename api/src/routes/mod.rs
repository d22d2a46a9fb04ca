//! Route handlers grouped by resource

pub mod auth;
pub mod bookings;
pub mod health;
pub mod users;

use std::sync::Arc;

use hs_core::repositories::{BookingRepository, ListingRepository, RoleRepository, UserRepository};
use hs_core::services::{BookingService, TokenService, UserService};

/// Application state that holds shared services
pub struct AppState<U, R, L, B>
where
    U: UserRepository,
    R: RoleRepository,
    L: ListingRepository,
    B: BookingRepository,
{
    pub user_service: Arc<UserService<U, R>>,
    pub booking_service: Arc<BookingService<U, L, B>>,
    /// Also used by the JWT middleware
    pub token_service: Arc<TokenService>,
}
