//! Translation of SQLx failures into domain errors

use hs_core::errors::DomainError;

/// Wrap a query failure with the operation that produced it
pub(crate) fn query_failed(operation: &str, error: sqlx::Error) -> DomainError {
    tracing::error!(operation = operation, error = %error, "Database query failed");
    DomainError::Database(format!("{}: {}", operation, error))
}

/// Wrap a column decoding failure
pub(crate) fn column(name: &str, error: sqlx::Error) -> DomainError {
    DomainError::Database(format!("Failed to get {}: {}", name, error))
}

/// Whether the error is a unique-key violation
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}
