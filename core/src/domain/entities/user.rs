//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::role::{Role, RoleName};

/// User entity
///
/// `id` is assigned by the store; a freshly constructed user carries `0`
/// until it has been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,

    /// Unique login name
    pub username: String,

    /// bcrypt hash of the password, never the plaintext
    pub password_hash: String,

    pub email: String,

    pub full_name: String,

    pub phone: Option<String>,

    /// Reference to the profile image
    pub thumbnail_url: String,

    /// Assigned roles, shared reference data
    pub roles: Vec<Role>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, not yet persisted user without roles
    pub fn new(
        username: String,
        password_hash: String,
        email: String,
        full_name: String,
        phone: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            username,
            password_hash,
            email,
            full_name,
            phone,
            thumbnail_url: String::new(),
            roles: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the store has assigned an id
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }

    /// Adds a role unless the user already holds one with the same name
    pub fn assign_role(&mut self, role: Role) {
        if !self.has_role(role.name) {
            self.roles.push(role);
            self.touch();
        }
    }

    pub fn has_role(&self, name: RoleName) -> bool {
        self.roles.iter().any(|r| r.name == name)
    }

    /// Role names in assignment order
    pub fn role_names(&self) -> Vec<RoleName> {
        self.roles.iter().map(|r| r.name).collect()
    }

    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.touch();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
        self.touch();
    }

    pub fn set_full_name(&mut self, full_name: impl Into<String>) {
        self.full_name = full_name.into();
        self.touch();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = Some(phone.into());
        self.touch();
    }

    pub fn set_thumbnail_url(&mut self, url: impl Into<String>) {
        self.thumbnail_url = url.into();
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
