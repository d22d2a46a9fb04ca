//! Domain error to HTTP response mapping
//!
//! Every failure is rendered as the standard envelope with `code` equal to
//! the HTTP status and `result` set to `null`.

use actix_web::{http::StatusCode, HttpResponse};
use validator::ValidationErrors;

use hs_core::errors::{BookingError, DomainError, TokenError, UserError};
use hs_shared::types::ApiResponse;

/// HTTP status for a domain error
pub fn status_for(error: &DomainError) -> StatusCode {
    match error {
        DomainError::Validation { .. } => StatusCode::BAD_REQUEST,
        DomainError::Internal { .. } | DomainError::Database(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        DomainError::User(e) => match e {
            UserError::UsernameExists => StatusCode::CONFLICT,
            UserError::RoleNotFound { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            UserError::UserNotFound => StatusCode::NOT_FOUND,
            UserError::UsernameInvalid
            | UserError::PasswordInvalid
            | UserError::PasswordConfirmMismatch => StatusCode::BAD_REQUEST,
            UserError::InvalidCredentials => StatusCode::UNAUTHORIZED,
        },
        DomainError::Token(e) => match e {
            TokenError::TokenGenerationFailed => StatusCode::INTERNAL_SERVER_ERROR,
            TokenError::TokenParseError
            | TokenError::InvalidSignature
            | TokenError::TokenExpired => StatusCode::UNAUTHORIZED,
        },
        DomainError::Booking(e) => match e {
            BookingError::ListingNotFound { .. } => StatusCode::NOT_FOUND,
            BookingError::InvalidDateRange
            | BookingError::GuestLimitExceeded { .. }
            | BookingError::StayTooLong { .. }
            | BookingError::PriceOutOfRange => StatusCode::BAD_REQUEST,
            BookingError::DatesUnavailable => StatusCode::CONFLICT,
        },
    }
}

/// Client-facing message; server-side failures are not described
fn message_for(error: &DomainError, status: StatusCode) -> String {
    match error {
        DomainError::Validation { message } => message.clone(),
        _ if status.is_server_error() => "Internal server error".to_string(),
        other => other.to_string(),
    }
}

/// Convert a domain error into an envelope response, logging it on the way
pub fn handle_domain_error(error: DomainError) -> HttpResponse {
    let status = status_for(&error);

    if status.is_server_error() {
        tracing::error!(code = error.code(), error = %error, "Request failed");
    } else {
        tracing::warn!(code = error.code(), error = %error, "Request rejected");
    }

    error_response(status, message_for(&error, status))
}

/// 400 envelope listing the fields that failed validation
pub fn handle_validation_errors(errors: &ValidationErrors) -> HttpResponse {
    let message = describe_validation_errors(errors);
    tracing::warn!(errors = %message, "Validation failed");
    error_response(StatusCode::BAD_REQUEST, message)
}

/// Envelope response with no payload
pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse::error(status.as_u16(), message))
}

/// `field: reason` pairs, sorted by field so the text is deterministic
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let reasons: Vec<String> = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            format!("{}: {}", field, reasons.join(", "))
        })
        .collect();
    fields.sort();
    fields.join("; ")
}
