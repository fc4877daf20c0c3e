/// Delivery outcome model
use crate::error::MailerError;

/// Result of a single send attempt
///
/// Sending never raises: transport and assembly failures are logged and
/// reported here instead, so callers must inspect the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Delivered { message_id: String },
    Failed { cause: String },
}

impl SendOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }

    /// Provider message id, present only when delivered
    pub fn message_id(&self) -> Option<&str> {
        match self {
            Self::Delivered { message_id } => Some(message_id),
            Self::Failed { .. } => None,
        }
    }

    pub fn cause(&self) -> Option<&str> {
        match self {
            Self::Delivered { .. } => None,
            Self::Failed { cause } => Some(cause),
        }
    }

    /// Converts into a `Result` for callers that prefer `?` propagation
    pub fn into_result(self) -> Result<String, MailerError> {
        match self {
            Self::Delivered { message_id } => Ok(message_id),
            Self::Failed { cause } => Err(MailerError::Delivery(cause)),
        }
    }
}
