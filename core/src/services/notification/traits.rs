//! Trait for mail provider integration

use async_trait::async_trait;

use super::types::EmailMessage;

/// Trait for delivering an email through a provider
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver a message, returning the provider's message id
    async fn send(&self, message: &EmailMessage) -> Result<String, String>;
}
