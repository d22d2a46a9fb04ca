use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use hs_core::repositories::{BookingRepository, ListingRepository, RoleRepository, UserRepository};
use hs_shared::types::ApiResponse;

use crate::dto::UpdateProfileRequest;
use crate::handlers::{error_response, handle_domain_error, handle_validation_errors};
use crate::middleware::{AuthContext, BearerToken};
use crate::routes::AppState;

/// Handler for GET /api/users/me
///
/// Resolves the bearer token itself: a token that parses but fails
/// verification yields 404, a malformed one 401.
pub async fn get_profile<U, R, L, B>(
    state: web::Data<AppState<U, R, L, B>>,
    token: BearerToken,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.user_service.get_profile(&token.0).await {
        Ok(info) => HttpResponse::Ok().json(ApiResponse::ok("get user info", info)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/users/me
///
/// # Request Body
///
/// ```json
/// {
///     "email": "alice@new.example",
///     "full_name": "",
///     "thumbnail": { "file_name": "me.png", "data": "iVBORw0KGgo..." }
/// }
/// ```
///
/// Blank or missing fields keep their current value.
pub async fn update_profile<U, R, L, B>(
    state: web::Data<AppState<U, R, L, B>>,
    auth: AuthContext,
    request: web::Json<UpdateProfileRequest>,
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

    let update = match request.into_inner().into_update() {
        Ok(update) => update,
        Err(e) => {
            tracing::warn!(error = %e, "Undecodable thumbnail payload");
            return error_response(StatusCode::BAD_REQUEST, "thumbnail: invalid base64 data");
        }
    };

    match state
        .user_service
        .update_profile(update, &auth.caller.username)
        .await
    {
        Ok(info) => HttpResponse::Ok().json(ApiResponse::ok("update profile success", info)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/users/me/favorites
pub async fn get_favorites<U, R, L, B>(
    state: web::Data<AppState<U, R, L, B>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.user_service.get_favorites(&auth.caller.username).await {
        Ok(favorites) => HttpResponse::Ok().json(ApiResponse::ok("get favorites", favorites)),
        Err(error) => handle_domain_error(error),
    }
}
