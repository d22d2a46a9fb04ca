use actix_web::{web, HttpResponse};

use hs_core::repositories::{BookingRepository, ListingRepository, RoleRepository, UserRepository};
use hs_core::services::CreateBooking;
use hs_shared::types::ApiResponse;

use crate::handlers::handle_domain_error;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for POST /api/bookings
///
/// Books a listing for the authenticated caller.
///
/// # Request Body
///
/// ```json
/// { "listing_id": 42, "check_in": "2026-07-10", "check_out": "2026-07-14", "guests": 2 }
/// ```
///
/// # Responses
///
/// - 201 `"booking success"` with the `BookingResponse`
/// - 400 for an empty or reversed stay, or a guest count the listing can't hold
/// - 404 when the listing does not exist
/// - 409 when the dates overlap an existing booking
pub async fn create_booking<U, R, L, B>(
    state: web::Data<AppState<U, R, L, B>>,
    auth: AuthContext,
    request: web::Json<CreateBooking>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    match state
        .booking_service
        .create_booking(request.into_inner(), &auth.caller)
        .await
    {
        Ok(booking) => HttpResponse::Created().json(ApiResponse::created("booking success", booking)),
        Err(error) => handle_domain_error(error),
    }
}
