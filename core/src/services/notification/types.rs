//! Notification payloads and failure reports

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A plain-text email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

impl EmailMessage {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }

    /// Greeting sent after a successful registration
    pub fn welcome(to: &str, full_name: &str) -> Self {
        Self::new(
            to,
            "Welcome to Airbnb",
            format!("Thank {} for choosing our service!", full_name),
        )
    }
}

/// A delivery that the provider rejected
#[derive(Debug, Clone)]
pub struct NotificationFailure {
    pub message: EmailMessage,
    pub reason: String,
    pub failed_at: DateTime<Utc>,
}
