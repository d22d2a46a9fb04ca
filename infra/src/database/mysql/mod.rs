//! MySQL repository implementations

mod errors;

pub mod booking_repository_impl;
pub mod listing_repository_impl;
pub mod role_repository_impl;
pub mod user_repository_impl;

pub use booking_repository_impl::MySqlBookingRepository;
pub use listing_repository_impl::MySqlListingRepository;
pub use role_repository_impl::MySqlRoleRepository;
pub use user_repository_impl::MySqlUserRepository;
