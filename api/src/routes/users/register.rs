use actix_web::{web, HttpResponse};
use validator::Validate;

use hs_core::repositories::{BookingRepository, ListingRepository, RoleRepository, UserRepository};
use hs_shared::types::ApiResponse;

use crate::dto::RegisterRequest;
use crate::handlers::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

/// Handler for POST /api/users
///
/// Creates an account with the GUEST role. The welcome email is queued in
/// the background; its outcome never changes this response.
///
/// # Responses
///
/// - 201 `"create user success"` with the new `UserResponse`
/// - 400 when a field fails validation
/// - 409 when the username is taken
pub async fn register<U, R, L, B>(
    state: web::Data<AppState<U, R, L, B>>,
    request: web::Json<RegisterRequest>,
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

    match state.user_service.register(request.into_inner().into()).await {
        Ok(user) => HttpResponse::Created().json(ApiResponse::created("create user success", user)),
        Err(error) => handle_domain_error(error),
    }
}
