use actix_web::{web, HttpResponse};

use hs_core::repositories::{BookingRepository, ListingRepository, RoleRepository, UserRepository};
use hs_shared::types::ApiResponse;

use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/bookings/my
pub async fn list_my_bookings<U, R, L, B>(
    state: web::Data<AppState<U, R, L, B>>,
    auth: AuthContext,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match state.booking_service.list_my_bookings(&auth.caller).await {
        Ok(bookings) => HttpResponse::Ok().json(ApiResponse::ok("get my booked list", bookings)),
        Err(error) => handle_domain_error(error),
    }
}
