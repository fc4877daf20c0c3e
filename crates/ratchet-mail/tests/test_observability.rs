/// Logging behaviour of the send path
///
/// Failures must leave a log record carrying the cause, and successful sends
/// must not leak full recipient addresses.
#[path = "common/mod.rs"]
mod common;

use common::mock_aws::MockSes;
use ratchet_mail::utils::logging::init_tracing;
use ratchet_mail::{Mailer, MailerConfig, ReadyToSendEmail};
use std::sync::Arc;

#[tokio::test]
async fn failed_send_logs_the_cause() {
    let (logs, _guard) = common::capture_logs();

    let ses = MockSes::failing("Throttling: Maximum sending rate exceeded");
    let mailer = Mailer::new(Arc::new(ses), MailerConfig::default()).unwrap();

    let email = ReadyToSendEmail::new(["ada@example.com"], "Rate test").with_txt("x");
    let outcome = mailer.send_email(&email).await;

    assert!(!outcome.is_delivered());
    let output = logs.contents();
    assert!(output.contains("ERROR"), "no error record in:\n{}", output);
    assert!(output.contains("Error while processing email"));
    assert!(output.contains("Maximum sending rate exceeded"));
}

#[tokio::test]
async fn assembly_failure_is_logged_not_raised() {
    let (logs, _guard) = common::capture_logs();

    let ses = MockSes::new();
    let mailer = Mailer::new(Arc::new(ses.clone()), MailerConfig::default()).unwrap();

    let email = ReadyToSendEmail::new(Vec::<String>::new(), "Nobody");
    let outcome = mailer.send_email(&email).await;

    assert!(!outcome.is_delivered());
    assert_eq!(ses.sent_count(), 0);
    assert!(logs.contents().contains("At least one destination address required"));
}

#[tokio::test]
async fn delivered_send_logs_redacted_recipients() {
    let (logs, _guard) = common::capture_logs();

    let ses = MockSes::new();
    let mailer = Mailer::new(Arc::new(ses), MailerConfig::default()).unwrap();

    let email = ReadyToSendEmail::new(["ada.lovelace@example.com"], "Confidential results")
        .with_txt("x");
    let outcome = mailer.send_email(&email).await;

    let output = logs.contents();
    assert!(output.contains("Email delivered"));
    assert!(output.contains(outcome.message_id().unwrap()));
    assert!(output.contains("***@example.com"));
    assert!(!output.contains("ada.lovelace"));
    assert!(!output.contains("Confidential results"));
}

#[test]
fn init_tracing_is_idempotent() {
    init_tracing();
    init_tracing();
    tracing::info!("subscriber installed");
}
