//! Bounded work queue drained by a single delivery task

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use chrono::Utc;

use hs_shared::utils::mask_email;

use super::traits::NotificationSender;
use super::types::{EmailMessage, NotificationFailure};

/// Handle for submitting notifications to the delivery worker
///
/// Cloning the handle shares the same queue. The worker stops once every
/// handle has been dropped and the queue is drained.
#[derive(Clone)]
pub struct NotificationDispatcher {
    queue: mpsc::Sender<EmailMessage>,
}

impl NotificationDispatcher {
    /// Spawns the delivery worker on the current tokio runtime
    ///
    /// # Returns
    ///
    /// The submit handle, the receiving end of the failure channel, and the
    /// worker's join handle. Both channels hold at most `capacity` entries.
    pub fn spawn(
        sender: Arc<dyn NotificationSender>,
        capacity: usize,
    ) -> (Self, mpsc::Receiver<NotificationFailure>, JoinHandle<()>) {
        let capacity = capacity.max(1);
        let (queue, jobs) = mpsc::channel(capacity);
        let (failures_tx, failures_rx) = mpsc::channel(capacity);

        let worker = tokio::spawn(run_worker(sender, jobs, failures_tx));

        (Self { queue }, failures_rx, worker)
    }

    /// Enqueues a message without waiting
    ///
    /// Returns `false` when the queue is full or the worker has stopped; the
    /// message is dropped in that case.
    pub fn submit(&self, message: EmailMessage) -> bool {
        match self.queue.try_send(message) {
            Ok(()) => true,
            Err(mpsc::error::TrySendError::Full(message)) => {
                tracing::warn!(
                    to = %mask_email(&message.to),
                    subject = %message.subject,
                    "Notification queue full, dropping message"
                );
                false
            }
            Err(mpsc::error::TrySendError::Closed(message)) => {
                tracing::warn!(
                    to = %mask_email(&message.to),
                    "Notification worker stopped, dropping message"
                );
                false
            }
        }
    }
}

async fn run_worker(
    sender: Arc<dyn NotificationSender>,
    mut jobs: mpsc::Receiver<EmailMessage>,
    failures: mpsc::Sender<NotificationFailure>,
) {
    while let Some(message) = jobs.recv().await {
        match sender.send(&message).await {
            Ok(message_id) => {
                tracing::info!(
                    to = %mask_email(&message.to),
                    message_id = %message_id,
                    "Notification delivered"
                );
            }
            Err(reason) => {
                tracing::error!(
                    to = %mask_email(&message.to),
                    error = %reason,
                    "Notification delivery failed"
                );
                let failure = NotificationFailure {
                    message,
                    reason,
                    failed_at: Utc::now(),
                };
                if failures.try_send(failure).is_err() {
                    tracing::warn!("Notification failure channel full or closed");
                }
            }
        }
    }
    tracing::debug!("Notification worker stopped");
}
