//! CORS middleware configuration for cross-origin requests.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use hs_shared::config::CorsConfig;

/// Creates a CORS middleware instance from configuration.
///
/// `*` in `allowed_origins` accepts any origin; otherwise only the listed
/// origins are accepted.
pub fn create_cors(config: &CorsConfig) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(config.max_age);

    if config.allows_any_origin() {
        tracing::info!("Configuring permissive CORS");
        cors = cors.allow_any_origin();
    } else {
        for origin in config.allowed_origins.iter().map(|s| s.trim()) {
            if !origin.is_empty() {
                tracing::info!(origin, "Adding allowed origin");
                cors = cors.allowed_origin(origin);
            }
        }
    }

    if config.allow_credentials {
        cors = cors.supports_credentials();
    }

    cors
}
