//! Request bodies of the user endpoints

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use hs_core::services::{ChangePassword, ImageUpload, RegisterUser, UpdateProfile};
use hs_shared::validation::{is_blank, is_valid_email, is_valid_phone};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 50, message = "must be 3-50 characters"))]
    pub username: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub password: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub full_name: String,
    #[serde(default)]
    #[validate(custom(function = "blank_or_phone", message = "must be a valid phone number"))]
    pub phone: Option<String>,
}

impl From<RegisterRequest> for RegisterUser {
    fn from(request: RegisterRequest) -> Self {
        RegisterUser {
            username: request.username,
            password: request.password,
            email: request.email,
            full_name: request.full_name,
            phone: request.phone,
        }
    }
}

/// Profile image sent inline as base64
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailPayload {
    pub file_name: String,
    #[serde(default)]
    pub content_type: Option<String>,
    /// Base64 (standard alphabet) encoded image bytes
    pub data: String,
}

impl ThumbnailPayload {
    pub fn decode(self) -> Result<ImageUpload, base64::DecodeError> {
        Ok(ImageUpload {
            bytes: STANDARD.decode(self.data.trim())?,
            file_name: self.file_name,
            content_type: self.content_type,
        })
    }
}

/// Blank fields are left unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[serde(default)]
    #[validate(custom(function = "blank_or_email", message = "must be a valid email address"))]
    pub email: Option<String>,
    #[serde(default)]
    #[validate(length(max = 100, message = "must be at most 100 characters"))]
    pub full_name: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "blank_or_phone", message = "must be a valid phone number"))]
    pub phone: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<ThumbnailPayload>,
}

impl UpdateProfileRequest {
    /// Decode the thumbnail and build the workflow input
    pub fn into_update(self) -> Result<UpdateProfile, base64::DecodeError> {
        Ok(UpdateProfile {
            email: self.email,
            full_name: self.full_name,
            phone: self.phone,
            thumbnail: self.thumbnail.map(ThumbnailPayload::decode).transpose()?,
        })
    }
}

fn blank_or_email(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) || is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::new("email"))
    }
}

fn blank_or_phone(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) || is_valid_phone(value) {
        Ok(())
    } else {
        Err(ValidationError::new("phone"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,
    pub password: String,
    #[validate(length(min = 6, message = "must be at least 6 characters"))]
    pub new_password: String,
    pub confirm_password: String,
}

impl From<ChangePasswordRequest> for ChangePassword {
    fn from(request: ChangePasswordRequest) -> Self {
        ChangePassword {
            username: request.username,
            password: request.password,
            new_password: request.new_password,
            confirm_password: request.confirm_password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register(username: &str, password: &str, email: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            email: email.to_string(),
            full_name: "Alice".to_string(),
            phone: None,
        }
    }

    #[test]
    fn test_register_validation() {
        assert!(register("alice", "secret1", "a@x.io").validate().is_ok());

        let errors = register("al", "short", "not-an-email").validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_update_profile_allows_blank_email() {
        let blank = UpdateProfileRequest {
            email: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank.validate().is_ok());

        let invalid = UpdateProfileRequest {
            email: Some("nope".to_string()),
            ..Default::default()
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_phone_validation() {
        let mut request = register("alice", "secret1", "a@x.io");
        request.phone = Some("+84 912 345 678".to_string());
        assert!(request.validate().is_ok());

        request.phone = Some("call me".to_string());
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));

        let blank = UpdateProfileRequest {
            phone: Some(String::new()),
            ..Default::default()
        };
        assert!(blank.validate().is_ok());

        let invalid = UpdateProfileRequest {
            phone: Some("12".to_string()),
            ..Default::default()
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_thumbnail_decode() {
        let request = UpdateProfileRequest {
            thumbnail: Some(ThumbnailPayload {
                file_name: "me.png".to_string(),
                content_type: Some("image/png".to_string()),
                data: "aGVsbG8=".to_string(),
            }),
            ..Default::default()
        };

        let update = request.into_update().unwrap();
        let image = update.thumbnail.unwrap();
        assert_eq!(image.bytes, b"hello");
        assert_eq!(image.file_name, "me.png");

        let broken = ThumbnailPayload {
            file_name: "me.png".to_string(),
            content_type: None,
            data: "%%%".to_string(),
        };
        assert!(broken.decode().is_err());
    }
}
