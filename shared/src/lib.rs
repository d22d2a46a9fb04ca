//! Shared utilities and common types for the Homestay server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - The response envelope
//! - Text and contact validation helpers

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, BookingConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig, MediaConfig,
    NotificationConfig, ServerConfig,
};
pub use types::{ApiResponse, HealthResponse, HealthStatus};
pub use utils::validation;
