//! Test doubles for the user service

use std::sync::{mpsc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::entities::{Listing, User};
use crate::errors::DomainError;
use crate::repositories::{MockUserRepository, UserRepository};
use crate::services::password::PasswordHasher;

/// Repository whose existence pre-check always misses, so a duplicate is
/// only caught by the unique constraint on insert
pub struct RacingUserRepository {
    pub inner: MockUserRepository,
}

impl RacingUserRepository {
    pub fn new() -> Self {
        Self {
            inner: MockUserRepository::new(),
        }
    }
}

#[async_trait]
impl UserRepository for RacingUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        self.inner.find_by_username(username).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        self.inner.find_all().await
    }

    async fn exists_by_username(&self, _username: &str) -> Result<bool, DomainError> {
        Ok(false)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        self.inner.create(user).await
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        self.inner.update(user).await
    }

    async fn count(&self) -> Result<u64, DomainError> {
        self.inner.count().await
    }

    async fn find_favorites(&self, user_id: i64) -> Result<Vec<Listing>, DomainError> {
        self.inner.find_favorites(user_id).await
    }
}

/// Hasher that blocks its thread until the paired sender fires
///
/// Gives up after two seconds, so a hash run on the runtime thread fails
/// instead of deadlocking the test.
pub struct GatedHasher {
    release: Mutex<mpsc::Receiver<()>>,
}

impl GatedHasher {
    pub fn new() -> (Self, mpsc::Sender<()>) {
        let (tx, rx) = mpsc::channel();
        (Self { release: Mutex::new(rx) }, tx)
    }
}

impl PasswordHasher for GatedHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        let released = self
            .release
            .lock()
            .map(|rx| rx.recv_timeout(Duration::from_secs(2)).is_ok())
            .unwrap_or(false);

        if released {
            Ok(format!("gated:{}", password))
        } else {
            Err(DomainError::Internal {
                message: "hasher was never released".to_string(),
            })
        }
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        Ok(hash == format!("gated:{}", password))
    }
}
