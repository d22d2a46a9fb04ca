//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - JWT signing configuration
//! - `booking` - Booking policy limits
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `media` - Profile image storage and the default thumbnail
//! - `notification` - Outbound email configuration
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod booking;
pub mod database;
pub mod environment;
pub mod media;
pub mod notification;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::JwtConfig;
pub use booking::BookingConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use media::MediaConfig;
pub use notification::{MailProvider, NotificationConfig};
pub use server::{CorsConfig, ServerConfig};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Email configuration
    #[serde(default)]
    pub notification: NotificationConfig,

    /// Image storage configuration
    #[serde(default)]
    pub media: MediaConfig,

    /// Booking policy configuration
    #[serde(default)]
    pub booking: BookingConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            jwt: JwtConfig::default(),
            notification: NotificationConfig::default(),
            media: MediaConfig::default(),
            booking: BookingConfig::default(),
            cors: CorsConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}
