//! API response envelope and health check types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Uniform response envelope returned by every endpoint
///
/// ```json
/// { "code": 201, "message": "booking success", "result": { ... } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Numeric status code, mirrors the HTTP status
    pub code: u16,

    /// Human-readable message
    pub message: String,

    /// Payload, `null` on failures
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create an envelope carrying a payload
    pub fn new(code: u16, message: impl Into<String>, result: T) -> Self {
        Self {
            code,
            message: message.into(),
            result: Some(result),
        }
    }

    /// Shorthand for a 200 envelope
    pub fn ok(message: impl Into<String>, result: T) -> Self {
        Self::new(200, message, result)
    }

    /// Shorthand for a 201 envelope
    pub fn created(message: impl Into<String>, result: T) -> Self {
        Self::new(201, message, result)
    }

    /// Check if the code is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    /// Extract the payload, consuming the envelope
    pub fn into_result(self) -> Option<T> {
        self.result
    }

    /// Map the payload to a different type
    pub fn map<U, F>(self, f: F) -> ApiResponse<U>
    where
        F: FnOnce(T) -> U,
    {
        ApiResponse {
            code: self.code,
            message: self.message,
            result: self.result.map(f),
        }
    }
}

impl ApiResponse<()> {
    /// Create an error envelope without payload
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            result: None,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall health status
    pub status: HealthStatus,

    /// Service name
    pub service: String,

    /// Server version
    pub version: String,

    /// Server timestamp
    pub timestamp: DateTime<Utc>,
}

/// Health status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let response = ApiResponse::created("booking success", serde_json::json!({ "id": 7 }));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], 201);
        assert_eq!(json["message"], "booking success");
        assert_eq!(json["result"]["id"], 7);
    }

    #[test]
    fn test_error_envelope_has_null_result() {
        let response = ApiResponse::error(404, "User not found");
        let json = serde_json::to_value(&response).unwrap();

        assert!(!response.is_success());
        assert!(json["result"].is_null());
    }

    #[test]
    fn test_map_keeps_code_and_message() {
        let response = ApiResponse::ok("count users", 3u64).map(|n| n * 2);
        assert_eq!(response.code, 200);
        assert_eq!(response.message, "count users");
        assert_eq!(response.into_result(), Some(6));
    }
}
