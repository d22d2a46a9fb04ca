pub mod booking;
pub mod listing;
pub mod role;
pub mod user;

pub use booking::BookingRepository;
pub use listing::ListingRepository;
pub use role::RoleRepository;
pub use user::UserRepository;

#[cfg(any(test, feature = "testing"))]
pub use booking::MockBookingRepository;
#[cfg(any(test, feature = "testing"))]
pub use listing::MockListingRepository;
#[cfg(any(test, feature = "testing"))]
pub use role::MockRoleRepository;
#[cfg(any(test, feature = "testing"))]
pub use user::MockUserRepository;
