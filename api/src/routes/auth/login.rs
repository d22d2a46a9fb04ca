use actix_web::{web, HttpResponse};
use validator::Validate;

use hs_core::repositories::{BookingRepository, ListingRepository, RoleRepository, UserRepository};
use hs_shared::types::ApiResponse;

use crate::dto::LoginRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /api/auth/login
///
/// Exchanges credentials for a bearer access token.
///
/// # Request Body
///
/// ```json
/// { "username": "alice", "password": "secret1" }
/// ```
///
/// # Response (200 OK)
///
/// ```json
/// {
///     "code": 200,
///     "message": "login success",
///     "result": { "token": "eyJ...", "token_type": "Bearer", "expires_in": 3600 }
/// }
/// ```
pub async fn login<U, R, L, B>(
    state: web::Data<AppState<U, R, L, B>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(&errors);
    }

    match state
        .user_service
        .login(&request.username, &request.password)
        .await
    {
        Ok(token) => {
            tracing::info!(username = %request.username, "Login succeeded");
            HttpResponse::Ok().json(ApiResponse::ok("login success", token))
        }
        Err(error) => handle_domain_error(error),
    }
}
