//! User repository trait defining the interface for user data persistence.
//!
//! The trait is async-first; implementations live in the infrastructure
//! layer and translate storage failures into `DomainError`.

use async_trait::async_trait;

use crate::domain::entities::{Listing, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use hs_core::repositories::UserRepository;
/// use hs_core::domain::entities::{Listing, User};
/// use hs_core::errors::DomainError;
///
/// struct InMemoryUsers;
///
/// #[async_trait]
/// impl UserRepository for InMemoryUsers {
///     async fn find_by_username(&self, _username: &str) -> Result<Option<User>, DomainError> {
///         Ok(None)
///     }
///
///     // ... other methods
/// #   async fn find_by_id(&self, _id: i64) -> Result<Option<User>, DomainError> { Ok(None) }
/// #   async fn find_all(&self) -> Result<Vec<User>, DomainError> { Ok(vec![]) }
/// #   async fn exists_by_username(&self, _u: &str) -> Result<bool, DomainError> { Ok(false) }
/// #   async fn create(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn update(&self, user: User) -> Result<User, DomainError> { Ok(user) }
/// #   async fn count(&self) -> Result<u64, DomainError> { Ok(0) }
/// #   async fn find_favorites(&self, _id: i64) -> Result<Vec<Listing>, DomainError> { Ok(vec![]) }
/// }
/// ```
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique username
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found, roles loaded
    /// * `Ok(None)` - No user with that username
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their store-assigned identifier
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// All users in creation order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Check if a username is already taken
    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError>;

    /// Persist a new user together with its role assignments
    ///
    /// # Returns
    /// * `Ok(User)` - The created user carrying its assigned id
    /// * `Err(DomainError::User(UserError::UsernameExists))` - The unique
    ///   username constraint rejected the insert
    /// * `Err(DomainError)` - Any other storage failure
    ///
    /// # Example
    /// ```no_run
    /// # use hs_core::repositories::UserRepository;
    /// # use hs_core::domain::entities::User;
    /// # async fn example(repo: &impl UserRepository) -> Result<(), Box<dyn std::error::Error>> {
    /// let user = User::new(
    ///     "alice".to_string(),
    ///     "$2b$12$...".to_string(),
    ///     "alice@example.com".to_string(),
    ///     "Alice".to_string(),
    ///     None,
    /// );
    ///
    /// let created = repo.create(user).await?;
    /// println!("Created user with ID: {}", created.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update the mutable profile fields and password hash of a user
    ///
    /// Fails with `UserError::UserNotFound` when no row matches `user.id`.
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Total number of users
    async fn count(&self) -> Result<u64, DomainError>;

    /// Listings the user has marked as favorite
    async fn find_favorites(&self, user_id: i64) -> Result<Vec<Listing>, DomainError>;
}
