//! Value objects representing immutable domain concepts.

pub mod booking_response;
pub mod caller;
pub mod user_views;

// Re-export commonly used types
pub use booking_response::BookingResponse;
pub use caller::Caller;
pub use user_views::{ListingFavorite, UserFavorites, UserInfo, UserResponse};
