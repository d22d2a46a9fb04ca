//! Error types for the user, token and booking workflows
//!
//! Each variant carries a stable code (see `code()`), which the presentation
//! layer uses to pick the HTTP status for the error envelope.

use thiserror::Error;

/// User and credential errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    #[error("Username already exists")]
    UsernameExists,

    #[error("Role not found: {role}")]
    RoleNotFound { role: String },

    #[error("User not found")]
    UserNotFound,

    #[error("Username is invalid")]
    UsernameInvalid,

    #[error("Current password is incorrect")]
    PasswordInvalid,

    #[error("New password and confirmation do not match")]
    PasswordConfirmMismatch,

    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl UserError {
    pub fn code(&self) -> &'static str {
        match self {
            UserError::UsernameExists => "USERNAME_EXISTED",
            UserError::RoleNotFound { .. } => "ROLE_NOT_EXISTED",
            UserError::UserNotFound => "USER_NOT_EXISTED",
            UserError::UsernameInvalid => "USERNAME_INVALID",
            UserError::PasswordInvalid => "PASSWORD_INVALID",
            UserError::PasswordConfirmMismatch => "PASSWORD_CONFIRM_NOT_MATCH",
            UserError::InvalidCredentials => "INVALID_CREDENTIALS",
        }
    }
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token could not be parsed at all (wrong shape, bad base64, bad JSON)
    #[error("Token could not be parsed")]
    TokenParseError,

    /// The token parsed but its signature did not verify
    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    TokenExpired,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

impl TokenError {
    pub fn code(&self) -> &'static str {
        match self {
            TokenError::TokenParseError => "TOKEN_PARSE_ERROR",
            TokenError::InvalidSignature => "INVALID_SIGNATURE",
            TokenError::TokenExpired => "TOKEN_EXPIRED",
            TokenError::TokenGenerationFailed => "TOKEN_GENERATION_FAILED",
        }
    }
}

/// Booking workflow errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Listing not found: {listing_id}")]
    ListingNotFound { listing_id: i64 },

    #[error("Check-out date must be after check-in date")]
    InvalidDateRange,

    #[error("Guest count must be between 1 and {max}")]
    GuestLimitExceeded { max: u32 },

    #[error("Listing is not available for the requested dates")]
    DatesUnavailable,

    #[error("Stay must not exceed {max_nights} nights")]
    StayTooLong { max_nights: i64 },

    #[error("Total price exceeds the supported range")]
    PriceOutOfRange,
}

impl BookingError {
    pub fn code(&self) -> &'static str {
        match self {
            BookingError::ListingNotFound { .. } => "LISTING_NOT_EXISTED",
            BookingError::InvalidDateRange => "INVALID_DATE_RANGE",
            BookingError::GuestLimitExceeded { .. } => "GUEST_LIMIT_EXCEEDED",
            BookingError::DatesUnavailable => "DATES_UNAVAILABLE",
            BookingError::StayTooLong { .. } => "STAY_TOO_LONG",
            BookingError::PriceOutOfRange => "PRICE_OUT_OF_RANGE",
        }
    }
}
