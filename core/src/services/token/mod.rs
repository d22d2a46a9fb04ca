//! Token service module for JWT management
//!
//! Issues HS256 access tokens on login and verifies them for the
//! authentication middleware and the profile lookup.

mod config;
mod service;


pub use config::TokenServiceConfig;
pub use service::TokenService;
