//! Outbound email configuration

use serde::{Deserialize, Serialize};

/// Email delivery backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Write emails to the log instead of sending them
    #[default]
    Log,
    /// POST emails to an HTTP mail API
    Http,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "log" | "mock" => Ok(MailProvider::Log),
            "http" => Ok(MailProvider::Http),
            _ => Err(format!("Unknown mail provider: {}", s)),
        }
    }
}

/// Email notification configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    /// Delivery backend
    #[serde(default)]
    pub provider: MailProvider,

    /// Endpoint of the HTTP mail API
    #[serde(default)]
    pub api_url: Option<String>,

    /// Bearer key for the HTTP mail API
    #[serde(default)]
    pub api_key: Option<String>,

    /// Sender address
    #[serde(default = "default_from_address")]
    pub from_address: String,

    /// Capacity of the background delivery queue
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Request timeout for the HTTP mail API in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::default(),
            api_url: None,
            api_key: None,
            from_address: default_from_address(),
            queue_capacity: default_queue_capacity(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_from_address() -> String {
    String::from("no-reply@homestay.local")
}

fn default_queue_capacity() -> usize {
    256
}

fn default_request_timeout() -> u64 {
    10
}
