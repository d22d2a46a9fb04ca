//! Log-only mail sender for development

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use hs_core::services::{EmailMessage, NotificationSender};
use hs_shared::utils::mask_email;

/// Sender that writes each message to the log instead of delivering it
#[derive(Clone, Default)]
pub struct LogMailSender {
    /// Number of messages "sent" so far
    message_count: Arc<AtomicU64>,
}

impl LogMailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationSender for LogMailSender {
    async fn send(&self, message: &EmailMessage) -> Result<String, String> {
        if !message.to.contains('@') {
            return Err(format!("Invalid recipient address: {}", mask_email(&message.to)));
        }

        let message_id = format!("log_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        info!(
            target: "mail_service",
            provider = "log",
            count,
            to = %mask_email(&message.to),
            message_id = %message_id,
            subject = %message.subject,
            body = %message.body,
            "Email sent (log)"
        );

        Ok(message_id)
    }
}
