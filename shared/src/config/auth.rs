//! Authentication configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "development-secret-please-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Shared HMAC secret for signing tokens
    pub secret: String,

    /// Access token expiry time in seconds
    #[serde(default = "default_access_token_expiry")]
    pub access_token_expiry: i64,

    /// JWT issuer claim
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            access_token_expiry: default_access_token_expiry(),
            issuer: default_issuer(),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

fn default_access_token_expiry() -> i64 {
    3600 // 1 hour
}

fn default_issuer() -> String {
    String::from("homestay")
}
