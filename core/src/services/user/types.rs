//! Inputs accepted by the user workflow

use crate::services::media::ImageUpload;

/// New account details
#[derive(Debug, Clone)]
pub struct RegisterUser {
    pub username: String,
    /// Plaintext, hashed before it is stored
    pub password: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
}

/// Partial profile update; `None` or blank fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UpdateProfile {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub thumbnail: Option<ImageUpload>,
}

/// Password change for `username`
#[derive(Debug, Clone)]
pub struct ChangePassword {
    pub username: String,
    /// Current password
    pub password: String,
    pub new_password: String,
    pub confirm_password: String,
}
