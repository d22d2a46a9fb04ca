//! Mock implementation of RoleRepository for testing

use async_trait::async_trait;

use crate::domain::entities::{Role, RoleName};
use crate::errors::DomainError;

use super::trait_::RoleRepository;

/// Mock role repository backed by a fixed list
pub struct MockRoleRepository {
    roles: Vec<Role>,
}

impl MockRoleRepository {
    /// A repository with no roles seeded
    pub fn empty() -> Self {
        Self { roles: Vec::new() }
    }

    /// A repository seeded with GUEST, HOST and ADMIN
    pub fn with_default_roles() -> Self {
        Self {
            roles: vec![
                Role::new(1, RoleName::Guest),
                Role::new(2, RoleName::Host),
                Role::new(3, RoleName::Admin),
            ],
        }
    }
}

impl Default for MockRoleRepository {
    fn default() -> Self {
        Self::with_default_roles()
    }
}

#[async_trait]
impl RoleRepository for MockRoleRepository {
    async fn find_by_name(&self, name: RoleName) -> Result<Option<Role>, DomainError> {
        Ok(self.roles.iter().find(|r| r.name == name).cloned())
    }
}
