//! Booking workflow

mod config;
mod service;
mod types;


pub use config::BookingServiceConfig;
pub use service::BookingService;
pub use types::CreateBooking;
