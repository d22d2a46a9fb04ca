//! Database module - MySQL implementations using SQLx
//!
//! Connection pooling, embedded migrations and the repository
//! implementations for users, roles, listings and bookings.

pub mod connection;
pub mod mysql;

#[cfg(test)]
mod tests;

pub use connection::{DatabasePool, PoolStatistics};
pub use mysql::{
    MySqlBookingRepository, MySqlListingRepository, MySqlRoleRepository, MySqlUserRepository,
};
