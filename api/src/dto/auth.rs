use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub username: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}
