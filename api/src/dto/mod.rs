pub mod auth;
pub mod user;

pub use auth::LoginRequest;
pub use user::{ChangePasswordRequest, RegisterRequest, ThumbnailPayload, UpdateProfileRequest};
