/// Error types for the mailer
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template rendering error: {0}")]
    Template(String),

    #[error("Composition error: {0}")]
    Composition(String),

    #[error("SES error: {0}")]
    Ses(String),

    #[error("Delivery failed: {0}")]
    Delivery(String),
}

impl MailerError {
    /// Determines if a caller could reasonably try the same operation again
    pub fn is_retriable(&self) -> bool {
        match self {
            Self::Ses(_) => true, // throttling and transient transport failures
            Self::Template(_) => true,
            Self::Delivery(_) => true,
            Self::Config(_) => false,
            Self::Composition(_) => false,
        }
    }
}
