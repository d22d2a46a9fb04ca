use actix_web::{web, HttpResponse};

use hs_core::repositories::{BookingRepository, ListingRepository, RoleRepository, UserRepository};
use hs_shared::types::ApiResponse;

use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/users
pub async fn list_users<U, R, L, B>(
    state: web::Data<AppState<U, R, L, B>>,
    _auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.user_service.list_all().await {
        Ok(users) => HttpResponse::Ok().json(ApiResponse::ok("get all users", users)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/users/count
pub async fn count_users<U, R, L, B>(
    state: web::Data<AppState<U, R, L, B>>,
    _auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.user_service.count().await {
        Ok(total) => HttpResponse::Ok().json(ApiResponse::ok("count users", total)),
        Err(error) => handle_domain_error(error),
    }
}
