//! MySQL implementation of the RoleRepository trait.

use async_trait::async_trait;
use sqlx::MySqlPool;

use hs_core::domain::entities::{Role, RoleName};
use hs_core::errors::DomainError;
use hs_core::repositories::RoleRepository;

use super::errors::query_failed;
use super::user_repository_impl::MySqlUserRepository;

/// MySQL implementation of RoleRepository
pub struct MySqlRoleRepository {
    pool: MySqlPool,
}

impl MySqlRoleRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for MySqlRoleRepository {
    async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>, DomainError> {
        let row = sqlx::query("SELECT id, name FROM roles WHERE name = ? LIMIT 1")
            .bind(name.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| query_failed("find role", e))?;

        row.as_ref().map(MySqlUserRepository::row_to_role).transpose()
    }
}
