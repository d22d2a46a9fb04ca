//! Main user service implementation

use std::sync::Arc;

use hs_shared::utils::validation::{is_blank, non_blank};

use crate::domain::entities::{AccessToken, RoleName, User};
use crate::domain::value_objects::{ListingFavorite, UserFavorites, UserInfo, UserResponse};
use crate::errors::{DomainError, DomainResult, UserError};
use crate::repositories::{RoleRepository, UserRepository};
use crate::services::media::ImageStore;
use crate::services::notification::{EmailMessage, NotificationDispatcher};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

use super::config::UserServiceConfig;
use super::types::{ChangePassword, RegisterUser, UpdateProfile};

/// User service for account and profile management
pub struct UserService<U, R>
where
    U: UserRepository,
    R: RoleRepository,
{
    /// User repository for database operations
    user_repository: Arc<U>,
    /// Role lookups for the default role
    role_repository: Arc<R>,
    /// Token service for issuing and verifying access tokens
    token_service: Arc<TokenService>,
    password_hasher: Arc<dyn PasswordHasher>,
    image_store: Arc<dyn ImageStore>,
    /// Queue for the welcome email
    notifications: NotificationDispatcher,
    /// Service configuration
    config: UserServiceConfig,
}

impl<U, R> UserService<U, R>
where
    U: UserRepository,
    R: RoleRepository,
{
    /// Create a new user service
    pub fn new(
        user_repository: Arc<U>,
        role_repository: Arc<R>,
        token_service: Arc<TokenService>,
        password_hasher: Arc<dyn PasswordHasher>,
        image_store: Arc<dyn ImageStore>,
        notifications: NotificationDispatcher,
        config: UserServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            role_repository,
            token_service,
            password_hasher,
            image_store,
            notifications,
            config,
        }
    }

    /// Register a new account with the GUEST role
    ///
    /// The welcome email is queued only after the user has been stored, and
    /// a delivery problem never fails the registration.
    ///
    /// # Returns
    ///
    /// * `Ok(UserResponse)` - The stored user
    /// * `Err(UserError::UsernameExists)` - The username is taken, including
    ///   when a concurrent registration wins the race to the unique index
    /// * `Err(UserError::RoleNotFound)` - GUEST has not been seeded
    pub async fn register(&self, request: RegisterUser) -> DomainResult<UserResponse> {
        if is_blank(&request.username) {
            return Err(DomainError::Validation {
                message: "Username must not be blank".to_string(),
            });
        }

        if self
            .user_repository
            .exists_by_username(&request.username)
            .await?
        {
            return Err(UserError::UsernameExists.into());
        }

        let role = self
            .role_repository
            .find_by_name(RoleName::Guest)
            .await?
            .ok_or_else(|| UserError::RoleNotFound {
                role: RoleName::Guest.to_string(),
            })?;

        let password_hash = self.hash_password(&request.password).await?;

        let mut user = User::new(
            request.username,
            password_hash,
            request.email,
            request.full_name,
            request.phone.filter(|p| !is_blank(p)),
        );
        user.set_thumbnail_url(self.config.default_thumbnail_url.as_str());
        user.assign_role(role);

        let user = self.user_repository.create(user).await?;

        tracing::info!(user_id = user.id, username = %user.username, "User registered");
        self.notifications
            .submit(EmailMessage::welcome(&user.email, &user.full_name));

        Ok(UserResponse::from(&user))
    }

    /// All users, unpaginated
    pub async fn list_all(&self) -> DomainResult<Vec<UserResponse>> {
        let users = self.user_repository.find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Subject of `token` if its signature, expiry and issuer check out
    ///
    /// # Returns
    ///
    /// * `Ok(Some(username))` - Token verified
    /// * `Ok(None)` - Token parsed but failed verification
    /// * `Err(TokenError::TokenParseError)` - Not a JWT
    pub fn verify_token(&self, token: &str) -> DomainResult<Option<String>> {
        self.token_service.verify_token(token)
    }

    /// Profile of the user identified by `token`
    pub async fn get_profile(&self, token: &str) -> DomainResult<UserInfo> {
        let username = self
            .verify_token(token)?
            .ok_or(UserError::UserNotFound)?;
        let user = self.require_user(&username).await?;
        Ok(UserInfo::from(&user))
    }

    /// Favorite listings of `username`
    pub async fn get_favorites(&self, username: &str) -> DomainResult<UserFavorites> {
        let user = self.require_user(username).await?;
        let favorites = self.user_repository.find_favorites(user.id).await?;

        Ok(UserFavorites {
            user_id: user.id,
            favorites: favorites.iter().map(ListingFavorite::from).collect(),
        })
    }

    /// Overwrite the non-blank fields of `request` on the user's profile
    ///
    /// A thumbnail payload is uploaded first; the profile is left untouched
    /// if the upload fails.
    pub async fn update_profile(
        &self,
        request: UpdateProfile,
        username: &str,
    ) -> DomainResult<UserInfo> {
        let mut user = self.require_user(username).await?;

        if let Some(email) = non_blank(request.email.as_deref()) {
            user.set_email(email);
        }
        if let Some(full_name) = non_blank(request.full_name.as_deref()) {
            user.set_full_name(full_name);
        }
        if let Some(phone) = non_blank(request.phone.as_deref()) {
            user.set_phone(phone);
        }
        if let Some(image) = request.thumbnail.as_ref() {
            let url = self.image_store.upload(image).await.map_err(|e| {
                tracing::error!(username = %username, error = %e, "Thumbnail upload failed");
                DomainError::Internal {
                    message: format!("Image upload failed: {}", e),
                }
            })?;
            user.set_thumbnail_url(url);
        }

        let user = self.user_repository.update(user).await?;
        tracing::info!(user_id = user.id, "Profile updated");
        Ok(UserInfo::from(&user))
    }

    /// Replace the password after checking the current one
    pub async fn change_password(&self, request: ChangePassword) -> DomainResult<UserInfo> {
        let mut user = self
            .user_repository
            .find_by_username(&request.username)
            .await?
            .ok_or(UserError::UsernameInvalid)?;

        if !self
            .verify_password(&request.password, &user.password_hash)
            .await?
        {
            tracing::warn!(username = %request.username, "Password change rejected: wrong current password");
            return Err(UserError::PasswordInvalid.into());
        }

        if request.new_password != request.confirm_password {
            return Err(UserError::PasswordConfirmMismatch.into());
        }

        let password_hash = self.hash_password(&request.new_password).await?;
        user.set_password_hash(password_hash);

        let user = self.user_repository.update(user).await?;
        tracing::info!(user_id = user.id, "Password changed");
        Ok(UserInfo::from(&user))
    }

    /// Total number of users
    pub async fn count(&self) -> DomainResult<u64> {
        self.user_repository.count().await
    }

    /// Exchange credentials for an access token
    ///
    /// Unknown users and wrong passwords fail the same way.
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AccessToken> {
        let user = match self.user_repository.find_by_username(username).await? {
            Some(user) => user,
            None => {
                tracing::info!(username = %username, "Login failed: unknown user");
                return Err(UserError::InvalidCredentials.into());
            }
        };

        if !self.verify_password(password, &user.password_hash).await? {
            tracing::info!(username = %username, "Login failed: wrong password");
            return Err(UserError::InvalidCredentials.into());
        }

        self.token_service
            .generate_token(&user.username, user.role_names())
    }

    /// bcrypt is CPU bound; keep it off the request's worker thread
    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let hasher = Arc::clone(&self.password_hasher);
        let password = password.to_string();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(hashing_task_failed)?
    }

    async fn verify_password(&self, password: &str, hash: &str) -> DomainResult<bool> {
        let hasher = Arc::clone(&self.password_hasher);
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(hashing_task_failed)?
    }

    async fn require_user(&self, username: &str) -> DomainResult<User> {
        self.user_repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| UserError::UserNotFound.into())
    }
}

fn hashing_task_failed(error: tokio::task::JoinError) -> DomainError {
    tracing::error!(error = %error, "Password hashing task failed");
    DomainError::Internal {
        message: format!("Password hashing task failed: {}", error),
    }
}
