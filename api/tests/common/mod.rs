//! Shared fixtures for the HTTP tests
#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;
use chrono::Utc;

use hs_api::AppState;
use hs_core::domain::entities::{Listing, RoleName};
use hs_core::repositories::{
    MockBookingRepository, MockListingRepository, MockRoleRepository, MockUserRepository,
};
use hs_core::services::media::{ImageStore, MockImageStore};
use hs_core::services::notification::MockNotificationSender;
use hs_core::services::{
    BcryptPasswordHasher, BookingService, BookingServiceConfig, NotificationDispatcher,
    RegisterUser, TokenService, TokenServiceConfig, UserService, UserServiceConfig,
};
use hs_infra::media::LocalImageStore;
use hs_shared::config::{AppConfig, MediaConfig};

pub type TestState =
    AppState<MockUserRepository, MockRoleRepository, MockListingRepository, MockBookingRepository>;

pub const PASSWORD: &str = "secret1";

pub struct TestContext {
    pub state: web::Data<TestState>,
    pub users: Arc<MockUserRepository>,
    pub listings: Arc<MockListingRepository>,
    pub mail: MockNotificationSender,
    pub images: MockImageStore,
    pub config: AppConfig,
}

/// Wire the services over in-memory repositories. Must run inside a runtime.
pub fn context() -> TestContext {
    let images = MockImageStore::new(false);
    build(Arc::new(images.clone()), images, AppConfig::default())
}

/// Like [`context`], but thumbnails are written to `media.storage_dir`
pub fn context_with_media(media: MediaConfig) -> TestContext {
    let config = AppConfig {
        media,
        ..AppConfig::default()
    };
    let store = Arc::new(LocalImageStore::new(&config.media));
    build(store, MockImageStore::new(false), config)
}

fn build(
    image_store: Arc<dyn ImageStore>,
    images: MockImageStore,
    config: AppConfig,
) -> TestContext {
    let users = Arc::new(MockUserRepository::new());
    let roles = Arc::new(MockRoleRepository::with_default_roles());
    let listings = Arc::new(MockListingRepository::new());
    let bookings = Arc::new(MockBookingRepository::new());
    let mail = MockNotificationSender::new(false);

    let (notifications, _failures, _worker) =
        NotificationDispatcher::spawn(Arc::new(mail.clone()), 16);
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::default()));

    let user_service = Arc::new(UserService::new(
        users.clone(),
        roles,
        token_service.clone(),
        Arc::new(BcryptPasswordHasher::new(4)),
        image_store,
        notifications,
        UserServiceConfig::from(&config.media),
    ));
    let booking_service = Arc::new(BookingService::new(
        users.clone(),
        listings.clone(),
        bookings,
        BookingServiceConfig::default(),
    ));

    TestContext {
        state: web::Data::new(AppState {
            user_service,
            booking_service,
            token_service,
        }),
        users,
        listings,
        mail,
        images,
        config,
    }
}

impl TestContext {
    /// Register `username` with [`PASSWORD`] directly through the service
    pub async fn seed_user(&self, username: &str) -> i64 {
        self.state
            .user_service
            .register(RegisterUser {
                username: username.to_string(),
                password: PASSWORD.to_string(),
                email: format!("{}@example.com", username),
                full_name: username.to_string(),
                phone: None,
            })
            .await
            .unwrap()
            .id
    }

    /// Bearer header value for `username`
    pub fn bearer(&self, username: &str) -> String {
        let token = self
            .state
            .token_service
            .generate_token(username, vec![RoleName::Guest])
            .unwrap();
        format!("Bearer {}", token.token)
    }

    pub async fn seed_listing(&self, id: i64, nightly_price: i64, max_guests: u32) -> Listing {
        let listing = Listing {
            id,
            host_id: 99,
            title: format!("Listing {}", id),
            address: "12 Hang Bac, Hanoi".to_string(),
            thumbnail_url: None,
            nightly_price,
            max_guests,
            created_at: Utc::now(),
        };
        self.listings.insert(listing.clone()).await;
        listing
    }
}
