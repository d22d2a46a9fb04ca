//! Configuration for the token service

use hs_shared::config::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_MINUTES, JWT_ISSUER};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// JWT signing algorithm
    pub algorithm: Algorithm,
    /// Expected and issued `iss` claim
    pub issuer: String,
    /// Access token lifetime in seconds
    pub access_token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            algorithm: Algorithm::HS256,
            issuer: JWT_ISSUER.to_string(),
            access_token_expiry_seconds: ACCESS_TOKEN_EXPIRY_MINUTES * 60,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            algorithm: Algorithm::HS256,
            issuer: config.issuer.clone(),
            access_token_expiry_seconds: config.access_token_expiry,
        }
    }
}
