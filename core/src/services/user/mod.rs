//! User workflow
//!
//! Registration, profile maintenance, password changes and login.

mod config;
mod service;
mod types;

#[cfg(test)]
mod tests;

pub use config::UserServiceConfig;
pub use service::UserService;
pub use types::{ChangePassword, RegisterUser, UpdateProfile};
