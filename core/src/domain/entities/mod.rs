//! Domain entities representing core business objects.

pub mod booking;
pub mod listing;
pub mod role;
pub mod token;
pub mod user;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus, StayPeriod};
pub use listing::Listing;
pub use role::{Role, RoleName};
pub use token::{AccessToken, Claims, ACCESS_TOKEN_EXPIRY_MINUTES, JWT_ISSUER};
pub use user::User;
