/// Ratchet Mail - email composition and delivery helpers for AWS SES
///
/// Renders remote templates into message bodies, assembles a raw
/// multipart/mixed MIME message by hand and submits it through the SES
/// raw-send API.
pub mod constants;
pub mod email;
pub mod error;
pub mod mailer;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::MailerError;
pub use mailer::Mailer;
pub use models::{EmailAttachment, MailerConfig, ReadyToSendEmail, SendOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
