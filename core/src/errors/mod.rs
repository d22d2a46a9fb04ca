//! Domain-specific error types and error handling.

mod types;


// Re-export all error types
pub use types::{BookingError, TokenError, UserError};

use thiserror::Error;

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Database error: {0}")]
    Database(String),

    // Bridge to specific error types
    #[error(transparent)]
    User(#[from] UserError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Booking(#[from] BookingError),
}

impl DomainError {
    /// Stable, machine-readable code for the error
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Validation { .. } => "VALIDATION_ERROR",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Database(_) => "DATABASE_ERROR",
            DomainError::User(e) => e.code(),
            DomainError::Token(e) => e.code(),
            DomainError::Booking(e) => e.code(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
