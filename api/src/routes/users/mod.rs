//! User route handlers
//!
//! - Registration (public)
//! - Listing and counting users
//! - The caller's own profile, favorites and password

pub mod list;
pub mod password;
pub mod profile;
pub mod register;

pub use list::{count_users, list_users};
pub use password::change_password;
pub use profile::{get_favorites, get_profile, update_profile};
pub use register::register;
