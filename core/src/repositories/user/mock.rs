//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::{Listing, User};
use crate::errors::{DomainError, UserError};

use super::trait_::UserRepository;

#[derive(Default)]
struct State {
    // keyed by id so iteration follows insertion order
    users: BTreeMap<i64, User>,
    favorites: HashMap<i64, Vec<Listing>>,
    next_id: i64,
}

/// Mock user repository for testing
///
/// Enforces username uniqueness on `create` the same way the database's
/// unique index does.
pub struct MockUserRepository {
    state: Arc<RwLock<State>>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(State {
                next_id: 1,
                ..State::default()
            })),
        }
    }

    /// Mark `listing` as a favorite of `user_id`
    pub async fn add_favorite(&self, user_id: i64, listing: Listing) {
        let mut state = self.state.write().await;
        state.favorites.entry(user_id).or_default().push(listing);
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.values().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.values().any(|u| u.username == username))
    }

    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut state = self.state.write().await;

        if state.users.values().any(|u| u.username == user.username) {
            return Err(UserError::UsernameExists.into());
        }

        user.id = state.next_id;
        state.next_id += 1;
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut state = self.state.write().await;

        if !state.users.contains_key(&user.id) {
            return Err(UserError::UserNotFound.into());
        }

        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let state = self.state.read().await;
        Ok(state.users.len() as u64)
    }

    async fn find_favorites(&self, user_id: i64) -> Result<Vec<Listing>, DomainError> {
        let state = self.state.read().await;
        Ok(state.favorites.get(&user_id).cloned().unwrap_or_default())
    }
}
