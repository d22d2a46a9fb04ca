//! Recording notification sender for tests

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::traits::NotificationSender;
use super::types::EmailMessage;

/// Mock sender that records every message it is asked to deliver
#[derive(Clone, Default)]
pub struct MockNotificationSender {
    pub sent: Arc<Mutex<Vec<EmailMessage>>>,
    pub should_fail: bool,
}

impl MockNotificationSender {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }

    pub fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }

    /// Polls until `count` messages were attempted or the timeout expires
    pub async fn wait_for(&self, count: usize) -> Vec<EmailMessage> {
        for _ in 0..100 {
            let sent = self.sent_messages();
            if sent.len() >= count {
                return sent;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        }
        self.sent_messages()
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send(&self, message: &EmailMessage) -> Result<String, String> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(message.clone());
        }
        if self.should_fail {
            return Err("Mail provider error".to_string());
        }
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }
}
