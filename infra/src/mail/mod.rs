//! Mail delivery module
//!
//! Implementations of the core `NotificationSender` trait. Senders do not
//! retry; a failed send is reported once on the dispatcher's failure channel.
//!
//! ## Providers
//!
//! - **Log**: Writes messages to the log, for development
//! - **Http**: POSTs messages to a JSON mail API with a bearer key

use std::sync::Arc;

use hs_core::services::NotificationSender;
use hs_shared::config::{MailProvider, NotificationConfig};

pub mod http_mail;
pub mod log_mail;

pub use http_mail::{HttpMailConfig, HttpMailSender};
pub use log_mail::LogMailSender;


/// Create a mail sender based on configuration
///
/// Falls back to the log sender when the HTTP provider is selected but
/// cannot be built from the configuration.
pub fn create_notification_sender(config: &NotificationConfig) -> Arc<dyn NotificationSender> {
    match config.provider {
        MailProvider::Log => Arc::new(LogMailSender::new()),
        MailProvider::Http => match HttpMailConfig::try_from(config).and_then(HttpMailSender::new) {
            Ok(sender) => {
                tracing::info!(api_url = %sender.api_url(), "HTTP mail sender initialized");
                Arc::new(sender)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize HTTP mail sender");
                tracing::warn!("Falling back to log mail sender");
                Arc::new(LogMailSender::new())
            }
        },
    }
}
