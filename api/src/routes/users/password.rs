use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use hs_core::repositories::{BookingRepository, ListingRepository, RoleRepository, UserRepository};
use hs_shared::types::ApiResponse;

use crate::dto::ChangePasswordRequest;
use crate::handlers::{error_response, handle_domain_error, handle_validation_errors};
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for PUT /api/users/password
///
/// The account is named by `username` in the body and authorized by its
/// current `password`. The body must name the caller's own account.
pub async fn change_password<U, R, L, B>(
    state: web::Data<AppState<U, R, L, B>>,
    auth: AuthContext,
    request: web::Json<ChangePasswordRequest>,
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

    if request.username != auth.caller.username {
        tracing::warn!(
            caller = %auth.caller.username,
            username = %request.username,
            "Password change rejected: account belongs to another user"
        );
        return error_response(
            StatusCode::FORBIDDEN,
            "Cannot change the password of another account",
        );
    }

    tracing::info!(username = %request.username, "Password change requested");

    match state
        .user_service
        .change_password(request.into_inner().into())
        .await
    {
        Ok(info) => HttpResponse::Ok().json(ApiResponse::ok("change password success", info)),
        Err(error) => handle_domain_error(error),
    }
}
