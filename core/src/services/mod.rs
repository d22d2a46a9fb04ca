//! Business services containing domain logic and use cases.

pub mod booking;
pub mod media;
pub mod notification;
pub mod password;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use booking::{BookingService, BookingServiceConfig, CreateBooking};
pub use media::{ImageStore, ImageUpload};
pub use notification::{EmailMessage, NotificationDispatcher, NotificationFailure, NotificationSender};
pub use password::{BcryptPasswordHasher, PasswordHasher};
pub use token::{TokenService, TokenServiceConfig};
pub use user::{ChangePassword, RegisterUser, UpdateProfile, UserService, UserServiceConfig};
