//! Role repository trait for role reference data lookups.

use async_trait::async_trait;

use crate::domain::entities::{Role, RoleName};
use crate::errors::DomainError;

/// Read access to the seeded role table
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Find a role by name
    ///
    /// # Returns
    /// * `Ok(Some(Role))` - Role found
    /// * `Ok(None)` - The role has not been seeded
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>, DomainError>;
}
