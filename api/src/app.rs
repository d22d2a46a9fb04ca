//! Application factory
//!
//! Builds the actix-web `App` for a given application state so that the
//! binary and the integration tests serve exactly the same routes.

use std::path::Path;

use actix_files::Files;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error::InternalError,
    http::StatusCode,
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use hs_core::repositories::{BookingRepository, ListingRepository, RoleRepository, UserRepository};
use hs_shared::config::{AppConfig, MediaConfig};

use crate::handlers::error_response;
use crate::middleware::{create_cors, JwtAuth};
use crate::routes::{auth, bookings, health, users, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<U, R, L, B>(
    app_state: web::Data<AppState<U, R, L, B>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    R: RoleRepository + 'static,
    L: ListingRepository + 'static,
    B: BookingRepository + 'static,
{
    let jwt = JwtAuth::new(app_state.token_service.clone());

    let app = App::new()
        .app_data(app_state)
        .app_data(json_config(config.server.max_payload_size))
        .wrap(create_cors(&config.cors))
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health::health_check));

    let app = match media_files(&config.media) {
        Some(files) => app.service(files),
        None => app,
    };

    app.service(
        web::scope(&config.server.api_prefix)
            .route("/auth/login", web::post().to(auth::login::<U, R, L, B>))
            .service(
                web::scope("/users")
                    .route("", web::post().to(users::register::<U, R, L, B>))
                    .route(
                        "",
                        web::get()
                            .to(users::list_users::<U, R, L, B>)
                            .wrap(jwt.clone()),
                    )
                    .route(
                        "/count",
                        web::get()
                            .to(users::count_users::<U, R, L, B>)
                            .wrap(jwt.clone()),
                    )
                    .route("/me", web::get().to(users::get_profile::<U, R, L, B>))
                    .route(
                        "/me",
                        web::put()
                            .to(users::update_profile::<U, R, L, B>)
                            .wrap(jwt.clone()),
                    )
                    .route(
                        "/me/favorites",
                        web::get()
                            .to(users::get_favorites::<U, R, L, B>)
                            .wrap(jwt.clone()),
                    )
                    .route(
                        "/password",
                        web::put()
                            .to(users::change_password::<U, R, L, B>)
                            .wrap(jwt.clone()),
                    ),
            )
            .service(
                web::scope("/bookings")
                    .route(
                        "",
                        web::post()
                            .to(bookings::create_booking::<U, R, L, B>)
                            .wrap(jwt.clone()),
                    )
                    .route(
                        "/my",
                        web::get()
                            .to(bookings::list_my_bookings::<U, R, L, B>)
                            .wrap(jwt),
                    ),
            ),
    )
    .default_service(web::route().to(not_found))
}

/// Static route for uploaded images when `public_base_url` is a local path
///
/// An absolute base URL means another host serves the files. A missing
/// directory is not mounted.
fn media_files(config: &MediaConfig) -> Option<Files> {
    let mount = config.public_base_url.trim_end_matches('/');
    if !mount.starts_with('/') {
        return None;
    }
    if !Path::new(&config.storage_dir).is_dir() {
        tracing::warn!(
            dir = %config.storage_dir,
            "Media directory missing; uploaded images are not served"
        );
        return None;
    }
    Some(Files::new(mount, &config.storage_dir))
}

/// Malformed JSON bodies get the envelope instead of actix's plain text
fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit).error_handler(|err, _req| {
        let message = format!("Invalid request body: {}", err);
        tracing::warn!(error = %err, "Rejected request body");
        InternalError::from_response(err, error_response(StatusCode::BAD_REQUEST, message)).into()
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "The requested resource was not found")
}
