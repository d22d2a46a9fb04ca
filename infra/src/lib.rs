//! # Infrastructure Layer
//!
//! Concrete implementations of the ports declared by `hs_core`:
//!
//! - **Database**: MySQL repositories and connection pooling using SQLx
//! - **Mail**: Welcome email delivery (log or HTTP mail API)
//! - **Media**: Profile image storage on the local filesystem
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Mail delivery providers
pub mod mail;

/// Image storage
pub mod media;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration failure
    #[error("Migration error: {0}")]
    Migration(String),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Filesystem error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail provider rejected a message
    #[error("Mail service error: {0}")]
    Mail(String),

    /// Image rejected or not storable
    #[error("Media error: {0}")]
    Media(String),
}
