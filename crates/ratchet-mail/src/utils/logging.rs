/// Logging helpers: PII redaction and subscriber setup
///
/// The mailer only emits `tracing` events; it never installs a subscriber.
/// Binaries call [`init_tracing`] once, tests scope their own subscriber with
/// `tracing::subscriber::set_default`.
use regex::Regex;
use std::sync::LazyLock;
use tracing_subscriber::EnvFilter;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Redacts email addresses from text, preserving the domain for debugging
///
/// # Examples
/// ```
/// use ratchet_mail::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("a@x.com, b@y.org"), "***@x.com, ***@y.org");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN
        .replace_all(text, |caps: &regex::Captures| {
            let email = &caps[0];
            match email.find('@') {
                Some(at_pos) => format!("***{}", &email[at_pos..]),
                None => "***@***".to_string(),
            }
        })
        .to_string()
}

/// Redacts a recipient list into a single log-safe string
pub fn redact_recipients(addresses: &[String]) -> String {
    redact_email(&addresses.join(", "))
}

/// Shows the first few characters of a subject and its length
///
/// # Examples
/// ```
/// use ratchet_mail::utils::logging::redact_subject;
///
/// assert_eq!(redact_subject("Quarterly invoice"), "Qua...[17 chars]");
/// assert_eq!(redact_subject("Hi"), "Hi");
/// ```
pub fn redact_subject(subject: &str) -> String {
    const MAX_VISIBLE_CHARS: usize = 3;
    const MIN_LENGTH_TO_REDACT: usize = 6;

    let char_count = subject.chars().count();
    if char_count < MIN_LENGTH_TO_REDACT {
        subject.to_string()
    } else {
        let visible: String = subject.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}...[{} chars]", visible, char_count)
    }
}

/// Redacts message body for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}

/// Installs a JSON `tracing` subscriber filtered by `RUST_LOG` (default `info`)
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .try_init();
}
