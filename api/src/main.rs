use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{error, info};

use hs_api::{config, create_app, telemetry, AppState};
use hs_core::services::{
    BcryptPasswordHasher, BookingService, BookingServiceConfig, NotificationDispatcher,
    TokenService, TokenServiceConfig, UserService, UserServiceConfig,
};
use hs_infra::database::{
    DatabasePool, MySqlBookingRepository, MySqlListingRepository, MySqlRoleRepository,
    MySqlUserRepository,
};
use hs_infra::mail::create_notification_sender;
use hs_infra::media::LocalImageStore;
use hs_shared::utils::mask_email;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load().context("loading configuration")?;
    telemetry::init(&config.logging)?;

    info!(environment = %config.environment, "Starting Homestay API server");
    if config.jwt.is_using_default_secret() {
        if config.environment.is_production() {
            anyhow::bail!("refusing to start in production with the default JWT secret");
        }
        tracing::warn!("Using the default JWT secret");
    }

    let database = DatabasePool::new(config.database.clone()).await?;
    database
        .health_check()
        .await
        .context("database health check")?;
    if config.database.run_migrations {
        database.run_migrations().await?;
    }
    info!(pool = %database.get_statistics(), "Database ready");
    let pool = database.get_pool().clone();

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let role_repository = Arc::new(MySqlRoleRepository::new(pool.clone()));
    let listing_repository = Arc::new(MySqlListingRepository::new(pool.clone()));
    let booking_repository = Arc::new(MySqlBookingRepository::new(pool));

    let (notifications, mut failures, _worker) = NotificationDispatcher::spawn(
        create_notification_sender(&config.notification),
        config.notification.queue_capacity,
    );
    tokio::spawn(async move {
        while let Some(failure) = failures.recv().await {
            error!(
                to = %mask_email(&failure.message.to),
                subject = %failure.message.subject,
                reason = %failure.reason,
                "Welcome email was not delivered"
            );
        }
    });

    let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(&config.jwt)));

    let image_store = LocalImageStore::new(&config.media);
    image_store.prepare().await.context("creating media directory")?;
    info!(dir = %image_store.storage_dir().display(), "Media storage ready");

    let user_service = Arc::new(UserService::new(
        user_repository.clone(),
        role_repository,
        token_service.clone(),
        Arc::new(BcryptPasswordHasher::default()),
        Arc::new(image_store),
        notifications,
        UserServiceConfig::from(&config.media),
    ));
    let booking_service = Arc::new(BookingService::new(
        user_repository,
        listing_repository,
        booking_repository,
        BookingServiceConfig::from(&config.booking),
    ));

    let state = web::Data::new(AppState {
        user_service,
        booking_service,
        token_service,
    });

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(state.clone(), &app_config));
    // 0 keeps actix's default of one worker per core
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server.bind(&bind_address)?.run().await?;

    database.close().await;
    info!("Server stopped");
    Ok(())
}
