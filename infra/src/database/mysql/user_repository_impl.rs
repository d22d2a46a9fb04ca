//! MySQL implementation of the UserRepository trait.
//!
//! Users and their role assignments live in `users` and `user_roles`.
//! Username uniqueness is enforced by the `uq_users_username` index.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use hs_core::domain::entities::{Listing, Role, RoleName, User};
use hs_core::errors::{DomainError, UserError};
use hs_core::repositories::UserRepository;

use super::errors::{column, is_unique_violation, query_failed};
use super::listing_repository_impl::MySqlListingRepository;

const USER_COLUMNS: &str = r#"
    id, username, password_hash, email, full_name, phone, thumbnail_url,
    created_at, updated_at
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity, without roles
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        Ok(User {
            id: row.try_get("id").map_err(|e| column("id", e))?,
            username: row.try_get("username").map_err(|e| column("username", e))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| column("password_hash", e))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            full_name: row.try_get("full_name").map_err(|e| column("full_name", e))?,
            phone: row.try_get("phone").map_err(|e| column("phone", e))?,
            thumbnail_url: row
                .try_get("thumbnail_url")
                .map_err(|e| column("thumbnail_url", e))?,
            roles: Vec::new(),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }

    pub(crate) fn row_to_role(row: &sqlx::mysql::MySqlRow) -> Result<Role, DomainError> {
        let name: String = row.try_get("name").map_err(|e| column("name", e))?;
        let name = name
            .parse::<RoleName>()
            .map_err(DomainError::Database)?;
        Ok(Role::new(row.try_get("id").map_err(|e| column("id", e))?, name))
    }

    /// Load the roles of a single user
    async fn load_roles(&self, user_id: i64) -> Result<Vec<Role>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT r.id, r.name
            FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = ?
            ORDER BY r.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("load user roles", e))?;

        rows.iter().map(Self::row_to_role).collect()
    }

    /// Attach roles to an optional user row
    async fn hydrate(
        &self,
        row: Option<sqlx::mysql::MySqlRow>,
    ) -> Result<Option<User>, DomainError> {
        match row {
            Some(row) => {
                let mut user = Self::row_to_user(&row)?;
                user.roles = self.load_roles(user.id).await?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {} FROM users WHERE username = ? LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("find user by username", e))?;

        self.hydrate(row).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError> {
        let sql = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("find user by id", e))?;

        self.hydrate(row).await
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let sql = format!("SELECT {} FROM users ORDER BY id", USER_COLUMNS);
        let rows = sqlx::query(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| query_failed("list users", e))?;

        let role_rows = sqlx::query(
            r#"
            SELECT ur.user_id, r.id, r.name
            FROM user_roles ur
            JOIN roles r ON r.id = ur.role_id
            ORDER BY ur.user_id, r.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("list user roles", e))?;

        let mut roles_by_user: HashMap<i64, Vec<Role>> = HashMap::new();
        for row in &role_rows {
            let user_id: i64 = row.try_get("user_id").map_err(|e| column("user_id", e))?;
            roles_by_user
                .entry(user_id)
                .or_default()
                .push(Self::row_to_role(row)?);
        }

        rows.iter()
            .map(|row| {
                let mut user = Self::row_to_user(row)?;
                user.roles = roles_by_user.remove(&user.id).unwrap_or_default();
                Ok(user)
            })
            .collect()
    }

    async fn exists_by_username(&self, username: &str) -> Result<bool, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM users WHERE username = ?")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("check username", e))?;

        let total: i64 = row.try_get("total").map_err(|e| column("total", e))?;
        Ok(total > 0)
    }

    async fn create(&self, mut user: User) -> Result<User, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| query_failed("begin transaction", e))?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (
                username, password_hash, email, full_name, phone, thumbnail_url,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.phone)
        .bind(&user.thumbnail_url)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::info!(username = %user.username, "Insert rejected by unique username index");
                DomainError::User(UserError::UsernameExists)
            } else {
                query_failed("create user", e)
            }
        })?;

        user.id = result.last_insert_id() as i64;

        for role in &user.roles {
            sqlx::query("INSERT INTO user_roles (user_id, role_id) VALUES (?, ?)")
                .bind(user.id)
                .bind(role.id)
                .execute(&mut *tx)
                .await
                .map_err(|e| query_failed("assign role", e))?;
        }

        tx.commit()
            .await
            .map_err(|e| query_failed("commit user", e))?;

        Ok(user)
    }

    async fn update(&self, mut user: User) -> Result<User, DomainError> {
        user.updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE users SET
                password_hash = ?,
                email = ?,
                full_name = ?,
                phone = ?,
                thumbnail_url = ?,
                updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&user.password_hash)
        .bind(&user.email)
        .bind(&user.full_name)
        .bind(&user.phone)
        .bind(&user.thumbnail_url)
        .bind(user.updated_at)
        .bind(user.id)
        .execute(&self.pool)
        .await
        .map_err(|e| query_failed("update user", e))?;

        if result.rows_affected() == 0 {
            return Err(UserError::UserNotFound.into());
        }

        Ok(user)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| query_failed("count users", e))?;

        let total: i64 = row.try_get("total").map_err(|e| column("total", e))?;
        Ok(total as u64)
    }

    async fn find_favorites(&self, user_id: i64) -> Result<Vec<Listing>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT l.id, l.host_id, l.title, l.address, l.thumbnail_url,
                   l.nightly_price, l.max_guests, l.created_at
            FROM favorites f
            JOIN listings l ON l.id = f.listing_id
            WHERE f.user_id = ?
            ORDER BY f.created_at, l.id
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| query_failed("list favorites", e))?;

        rows.iter().map(MySqlListingRepository::row_to_listing).collect()
    }
}
