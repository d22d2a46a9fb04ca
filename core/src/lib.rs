//! # Homestay Core
//!
//! Core business logic and domain layer for the Homestay backend.
//! This crate contains domain entities, business services, repository interfaces,
//! and error types that form the foundation of the application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    AccessToken, Booking, BookingStatus, Claims, Listing, Role, RoleName, StayPeriod, User,
};
pub use domain::value_objects::{
    BookingResponse, Caller, ListingFavorite, UserFavorites, UserInfo, UserResponse,
};
pub use errors::*;
