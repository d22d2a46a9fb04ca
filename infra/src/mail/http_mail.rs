//! HTTP mail API sender
//!
//! Sends each message as a JSON POST:
//!
//! ```text
//! POST {api_url}
//! Authorization: Bearer {api_key}
//! {"from": "...", "to": "...", "subject": "...", "text": "..."}
//! ```
//!
//! A 2xx response is a successful delivery; the provider's `id` field, when
//! present, becomes the returned message id.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use hs_core::services::{EmailMessage, NotificationSender};
use hs_shared::config::NotificationConfig;
use hs_shared::utils::mask_email;

use crate::InfrastructureError;

/// HTTP mail sender configuration
#[derive(Debug, Clone)]
pub struct HttpMailConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub from_address: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TryFrom<&NotificationConfig> for HttpMailConfig {
    type Error = InfrastructureError;

    fn try_from(config: &NotificationConfig) -> Result<Self, Self::Error> {
        let api_url = config
            .api_url
            .clone()
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| InfrastructureError::Config("Mail API URL is not set".to_string()))?;

        Ok(Self {
            api_url,
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
            request_timeout_secs: config.request_timeout_secs,
        })
    }
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(default)]
    id: Option<String>,
}

/// Sender backed by an HTTP mail API
pub struct HttpMailSender {
    client: Client,
    config: HttpMailConfig,
}

impl HttpMailSender {
    /// Create a new sender with its own connection pool
    pub fn new(config: HttpMailConfig) -> Result<Self, InfrastructureError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    async fn post(&self, message: &EmailMessage) -> Result<String, InfrastructureError> {
        let body = SendRequest {
            from: &self.config.from_address,
            to: &message.to,
            subject: &message.subject,
            text: &message.body,
        };

        let mut request = self.client.post(&self.config.api_url).json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Mail(format!(
                "Mail API returned {}: {}",
                status, detail
            )));
        }

        // some providers answer 202 with an empty body
        let text = response.text().await?;
        let id = serde_json::from_str::<SendResponse>(&text)
            .ok()
            .and_then(|r| r.id)
            .unwrap_or_else(|| format!("http_{}", uuid::Uuid::new_v4()));

        Ok(id)
    }
}

#[async_trait]
impl NotificationSender for HttpMailSender {
    async fn send(&self, message: &EmailMessage) -> Result<String, String> {
        let masked = mask_email(&message.to);
        debug!(to = %masked, subject = %message.subject, "Sending email via HTTP API");

        match self.post(message).await {
            Ok(id) => {
                info!(
                    target: "mail_service",
                    provider = "http",
                    to = %masked,
                    message_id = %id,
                    "Email sent"
                );
                Ok(id)
            }
            Err(e) => {
                error!(to = %masked, error = %e, "Email delivery failed");
                Err(e.to_string())
            }
        }
    }
}
