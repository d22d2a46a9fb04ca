//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::RoleName;

/// Default access token lifetime (60 minutes)
pub const ACCESS_TOKEN_EXPIRY_MINUTES: i64 = 60;

/// Default JWT issuer
pub const JWT_ISSUER: &str = "homestay";

/// Claims structure for JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,

    /// Roles held when the token was issued
    #[serde(default)]
    pub roles: Vec<RoleName>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates claims for an access token valid for `ttl_seconds`
    pub fn new_access_token(
        username: &str,
        roles: Vec<RoleName>,
        issuer: &str,
        ttl_seconds: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: username.to_string(),
            roles,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Access token handed to a client after a successful login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub token: String,

    /// Always "Bearer"
    pub token_type: String,

    /// Lifetime in seconds
    pub expires_in: i64,
}

impl AccessToken {
    pub fn bearer(token: String, expires_in: i64) -> Self {
        Self {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        }
    }
}
