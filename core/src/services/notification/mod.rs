//! Outbound notifications
//!
//! Messages are handed to a bounded queue and delivered by a background
//! worker, so request handlers never wait on the mail provider.

mod dispatcher;
mod traits;
mod types;

#[cfg(any(test, feature = "testing"))]
pub mod mock;

#[cfg(test)]
mod tests;

pub use dispatcher::NotificationDispatcher;
pub use traits::NotificationSender;
pub use types::{EmailMessage, NotificationFailure};

#[cfg(any(test, feature = "testing"))]
pub use mock::MockNotificationSender;
