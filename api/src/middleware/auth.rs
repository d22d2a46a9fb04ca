//! JWT authentication middleware for protecting API endpoints.
//!
//! The middleware extracts the bearer token from the Authorization header,
//! verifies it with the core `TokenService` and injects an [`AuthContext`]
//! carrying the caller identity into the request extensions. Handlers
//! receive that identity explicitly through the `AuthContext` extractor.

use actix_web::{
    dev::{Payload, Service, ServiceRequest, ServiceResponse, Transform},
    error::InternalError,
    http::{header::AUTHORIZATION, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

use hs_core::{domain::entities::Claims, services::TokenService, Caller};

use crate::handlers::error_response;

/// Authenticated caller injected into requests
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Identity the workflows act on behalf of
    pub caller: Caller,
    /// JWT ID for tracing
    pub jti: String,
}

impl AuthContext {
    /// Creates a new authentication context from verified JWT claims
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            caller: Caller::new(claims.sub, claims.roles),
            jti: claims.jti,
        }
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let token_service = Arc::clone(&self.token_service);

        Box::pin(async move {
            let token = match bearer_token(req.request()) {
                Some(token) => token,
                None => return Err(unauthorized("Missing or invalid Authorization header")),
            };

            let claims = token_service.verify_claims(&token).map_err(|e| {
                tracing::warn!(path = %req.path(), error = %e, "Rejected access token");
                unauthorized(&e.to_string())
            })?;

            req.extensions_mut().insert(AuthContext::from_claims(claims));

            service.call(req).await
        })
    }
}

/// Extracts the Bearer token from the Authorization header
pub fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// 401 as an actix error carrying the envelope body
fn unauthorized(message: &str) -> Error {
    InternalError::from_response(
        message.to_string(),
        error_response(StatusCode::UNAUTHORIZED, message),
    )
    .into()
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| unauthorized("Authentication required"));

        ready(result)
    }
}

/// Raw bearer token, for endpoints that resolve the token themselves
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl FromRequest for BearerToken {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            bearer_token(req)
                .map(BearerToken)
                .ok_or_else(|| unauthorized("Missing or invalid Authorization header")),
        )
    }
}
