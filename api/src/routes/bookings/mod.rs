//! Booking route handlers

pub mod create;
pub mod my_bookings;

pub use create::create_booking;
pub use my_bookings::list_my_bookings;
