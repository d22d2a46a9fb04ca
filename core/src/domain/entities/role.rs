//! Role reference data.

use serde::{Deserialize, Serialize};

/// Name of a permission group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleName {
    /// Default role of every registered user
    Guest,
    /// May publish listings
    Host,
    Admin,
}

impl RoleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleName::Guest => "GUEST",
            RoleName::Host => "HOST",
            RoleName::Admin => "ADMIN",
        }
    }
}

impl std::fmt::Display for RoleName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GUEST" => Ok(RoleName::Guest),
            "HOST" => Ok(RoleName::Host),
            "ADMIN" => Ok(RoleName::Admin),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// Role entity, looked up by name and shared between users
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: i64,
    pub name: RoleName,
}

impl Role {
    pub fn new(id: i64, name: RoleName) -> Self {
        Self { id, name }
    }
}
