//! Main token service implementation

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::role::RoleName;
use crate::domain::entities::token::{AccessToken, Claims};
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and verifying JWT access tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(config.algorithm);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Issues a signed access token for `username`
    ///
    /// # Returns
    ///
    /// * `Ok(AccessToken)` - The bearer token and its lifetime
    /// * `Err(TokenError::TokenGenerationFailed)` - Signing failed
    pub fn generate_token(
        &self,
        username: &str,
        roles: Vec<RoleName>,
    ) -> Result<AccessToken, DomainError> {
        let claims = Claims::new_access_token(
            username,
            roles,
            &self.config.issuer,
            self.config.access_token_expiry_seconds,
        );
        let token = self.encode_jwt(&claims)?;
        Ok(AccessToken::bearer(token, self.config.access_token_expiry_seconds))
    }

    /// Encodes claims into a JWT
    pub(crate) fn encode_jwt(&self, claims: &Claims) -> Result<String, DomainError> {
        let header = Header::new(self.config.algorithm);
        encode(&header, claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    /// Verifies a token and returns its subject
    ///
    /// # Returns
    ///
    /// * `Ok(Some(subject))` - Signature, expiry and issuer all check out
    /// * `Ok(None)` - The token is well formed but failed verification
    /// * `Err(TokenError::TokenParseError)` - The input is not a JWT at all
    pub fn verify_token(&self, token: &str) -> Result<Option<String>, DomainError> {
        match self.verify_claims(token) {
            Ok(claims) => Ok(Some(claims.sub)),
            Err(DomainError::Token(TokenError::TokenParseError)) => {
                Err(TokenError::TokenParseError.into())
            }
            Err(DomainError::Token(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Verifies a token and returns the full claims
    ///
    /// Used by the authentication middleware to build the caller identity.
    pub fn verify_claims(&self, token: &str) -> Result<Claims, DomainError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                let error = match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                    ErrorKind::InvalidSignature
                    | ErrorKind::InvalidIssuer
                    | ErrorKind::InvalidAlgorithm
                    | ErrorKind::ImmatureSignature
                    | ErrorKind::MissingRequiredClaim(_) => TokenError::InvalidSignature,
                    _ => TokenError::TokenParseError,
                };
                tracing::debug!(error = %e, "Token verification failed");
                DomainError::Token(error)
            })
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }
}
