//! Unit tests for token entities

use crate::domain::entities::role::RoleName;
use crate::domain::entities::token::{AccessToken, Claims, JWT_ISSUER};

#[test]
fn test_access_token_claims() {
    let claims = Claims::new_access_token("alice", vec![RoleName::Guest], JWT_ISSUER, 3600);

    assert_eq!(claims.sub, "alice");
    assert_eq!(claims.iss, JWT_ISSUER);
    assert_eq!(claims.roles, vec![RoleName::Guest]);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn test_claims_have_unique_ids() {
    let a = Claims::new_access_token("alice", vec![], JWT_ISSUER, 60);
    let b = Claims::new_access_token("alice", vec![], JWT_ISSUER, 60);
    assert_ne!(a.jti, b.jti);
}

#[test]
fn test_expired_claims() {
    let claims = Claims::new_access_token("alice", vec![], JWT_ISSUER, -10);
    assert!(claims.exp < chrono::Utc::now().timestamp());
}

#[test]
fn test_claims_without_roles_deserialize() {
    let json = r#"{"sub":"bob","iat":1,"exp":2,"iss":"homestay","jti":"x"}"#;
    let claims: Claims = serde_json::from_str(json).unwrap();
    assert!(claims.roles.is_empty());
}

#[test]
fn test_bearer_access_token() {
    let token = AccessToken::bearer("abc".to_string(), 3600);
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(token.expires_in, 3600);
}
