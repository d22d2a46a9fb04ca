//! Authenticated caller identity passed explicitly into workflow calls.

use serde::{Deserialize, Serialize};

use crate::domain::entities::role::RoleName;

/// Who is making the current request
///
/// Built by the presentation layer from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub username: String,
    pub roles: Vec<RoleName>,
}

impl Caller {
    pub fn new(username: impl Into<String>, roles: Vec<RoleName>) -> Self {
        Self {
            username: username.into(),
            roles,
        }
    }

    pub fn has_role(&self, role: RoleName) -> bool {
        self.roles.contains(&role)
    }
}
