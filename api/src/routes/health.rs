use actix_web::HttpResponse;
use chrono::Utc;

use hs_shared::types::{HealthResponse, HealthStatus};

/// Handler for GET /health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: HealthStatus::Healthy,
        service: "homestay-api".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}
