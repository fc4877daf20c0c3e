/// SES raw email transport
use crate::error::MailerError;
use async_trait::async_trait;
use aws_sdk_ses::error::DisplayErrorContext;
use aws_sdk_ses::primitives::Blob;
use aws_sdk_ses::types::RawMessage;

#[cfg(test)]
use mockall::mock;

/// Submits a fully assembled MIME message and returns the provider message id
///
/// Recipients are taken from the message headers, including `Bcc`.
#[async_trait]
pub trait RawEmailTransport: Send + Sync {
    async fn send_raw_email(&self, raw_email: &[u8]) -> Result<String, MailerError>;
}

pub struct SesRawEmailTransport {
    client: aws_sdk_ses::Client,
}

impl SesRawEmailTransport {
    pub fn new(client: aws_sdk_ses::Client) -> Self {
        Self { client }
    }

    /// Builds a client from the ambient AWS configuration (env, profile, IMDS)
    pub async fn from_env() -> Self {
        let aws_config = aws_config::load_from_env().await;
        Self::new(aws_sdk_ses::Client::new(&aws_config))
    }
}

#[async_trait]
impl RawEmailTransport for SesRawEmailTransport {
    async fn send_raw_email(&self, raw_email: &[u8]) -> Result<String, MailerError> {
        let raw_message = RawMessage::builder()
            .data(Blob::new(raw_email))
            .build()
            .map_err(|e| MailerError::Ses(format!("Failed to build raw message: {}", e)))?;

        // Single attempt; callers own any retry policy
        let response = self
            .client
            .send_raw_email()
            .raw_message(raw_message)
            .send()
            .await
            .map_err(|e| {
                MailerError::Ses(format!(
                    "SES send_raw_email failed: {}",
                    DisplayErrorContext(&e)
                ))
            })?;

        let message_id = response.message_id;

        tracing::info!(
            message_id = %message_id,
            size = raw_email.len(),
            "Sent raw email via SES"
        );
        Ok(message_id)
    }
}

#[cfg(test)]
mock! {
    pub RawEmailTransport {}

    #[async_trait]
    impl RawEmailTransport for RawEmailTransport {
        async fn send_raw_email(&self, raw_email: &[u8]) -> Result<String, MailerError>;
    }
}
