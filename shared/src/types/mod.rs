//! Type definitions shared by the API and its tests

pub mod response;

pub use response::{ApiResponse, HealthResponse, HealthStatus};
