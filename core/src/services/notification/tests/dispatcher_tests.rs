//! Unit tests for the notification dispatcher

use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Notify;
use tracing_subscriber::fmt::MakeWriter;

use crate::services::notification::{
    EmailMessage, MockNotificationSender, NotificationDispatcher, NotificationSender,
};

/// Sender that blocks until released, used to fill the queue
struct GatedSender {
    gate: Arc<Notify>,
}

#[async_trait]
impl NotificationSender for GatedSender {
    async fn send(&self, _message: &EmailMessage) -> Result<String, String> {
        self.gate.notified().await;
        Ok("gated".to_string())
    }
}

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_welcome_message_text() {
    let message = EmailMessage::welcome("alice@example.com", "Alice Nguyen");

    assert_eq!(message.to, "alice@example.com");
    assert_eq!(message.subject, "Welcome to Airbnb");
    assert_eq!(message.body, "Thank Alice Nguyen for choosing our service!");
}

#[tokio::test]
async fn test_dispatcher_delivers_in_background() {
    let sender = MockNotificationSender::new(false);
    let (dispatcher, _failures, _worker) =
        NotificationDispatcher::spawn(Arc::new(sender.clone()), 8);

    assert!(dispatcher.submit(EmailMessage::new("a@example.com", "s", "b")));
    assert!(dispatcher.submit(EmailMessage::new("b@example.com", "s", "b")));

    let sent = sender.wait_for(2).await;
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].to, "a@example.com");
    assert_eq!(sent[1].to, "b@example.com");
}

#[tokio::test]
async fn test_dispatcher_reports_failures_on_channel() {
    let sender = MockNotificationSender::new(true);
    let (dispatcher, mut failures, _worker) =
        NotificationDispatcher::spawn(Arc::new(sender), 8);

    assert!(dispatcher.submit(EmailMessage::welcome("a@example.com", "A")));

    let failure = tokio::time::timeout(Duration::from_secs(1), failures.recv())
        .await
        .expect("failure should be reported")
        .expect("channel open");
    assert_eq!(failure.message.to, "a@example.com");
    assert_eq!(failure.reason, "Mail provider error");
}

#[tokio::test]
async fn test_full_queue_drops_without_blocking() {
    let gate = Arc::new(Notify::new());
    let (dispatcher, _failures, _worker) =
        NotificationDispatcher::spawn(Arc::new(GatedSender { gate: gate.clone() }), 1);

    // the worker takes the first message and parks on the gate
    assert!(dispatcher.submit(EmailMessage::new("1@example.com", "s", "b")));
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert!(dispatcher.submit(EmailMessage::new("2@example.com", "s", "b")));
    assert!(!dispatcher.submit(EmailMessage::new("3@example.com", "s", "b")));

    gate.notify_waiters();
}

#[tokio::test]
async fn test_worker_stops_when_handles_dropped() {
    let sender = MockNotificationSender::new(false);
    let (dispatcher, _failures, worker) =
        NotificationDispatcher::spawn(Arc::new(sender.clone()), 4);

    dispatcher.submit(EmailMessage::new("a@example.com", "s", "b"));
    drop(dispatcher);

    tokio::time::timeout(Duration::from_secs(1), worker)
        .await
        .expect("worker should exit")
        .unwrap();
    assert_eq!(sender.sent_messages().len(), 1);
}

#[tokio::test]
async fn test_dispatcher_masks_recipient_in_logs() {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let sender = MockNotificationSender::new(true);
    let (dispatcher, mut failures, _worker) = NotificationDispatcher::spawn(Arc::new(sender), 4);

    dispatcher.submit(EmailMessage::welcome("alice@example.com", "Alice"));
    // the failure is forwarded after the delivery error is logged
    let failure = failures.recv().await.unwrap();
    assert_eq!(failure.message.to, "alice@example.com");

    let output = logs.contents();
    assert!(output.contains("Notification delivery failed"), "{}", output);
    assert!(output.contains("a****@example.com"), "{}", output);
    assert!(!output.contains("alice@example.com"), "{}", output);
}
