/// Configuration service - loads mailer config from environment variables
use crate::constants::{ENV_AUTO_BCC, ENV_DEFAULT_SENDER};
use crate::error::MailerError;
use crate::models::MailerConfig;
use async_trait::async_trait;

#[async_trait]
pub trait ConfigProvider: Send + Sync {
    async fn get_config(&self) -> Result<MailerConfig, MailerError>;
}

/// Environment variable-based configuration provider
///
/// Reads `MAILER_DEFAULT_SENDER` and the comma separated `MAILER_AUTO_BCC`.
pub struct EnvConfigProvider {
    config: MailerConfig,
}

impl EnvConfigProvider {
    pub fn new() -> Result<Self, MailerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MailerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_sending_address = lookup(ENV_DEFAULT_SENDER)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let auto_bcc_addresses = lookup(ENV_AUTO_BCC)
            .unwrap_or_default()
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().to_string())
            .collect();

        let config = MailerConfig {
            default_sending_address,
            auto_bcc_addresses,
        };

        config
            .validate()
            .map_err(|e| MailerError::Config(format!("Invalid configuration: {}", e)))?;

        tracing::info!(
            has_default_sender = config.default_sending_address.is_some(),
            auto_bcc_count = config.auto_bcc_addresses.len(),
            "Mailer configuration validated successfully"
        );

        Ok(Self { config })
    }
}

#[async_trait]
impl ConfigProvider for EnvConfigProvider {
    async fn get_config(&self) -> Result<MailerConfig, MailerError> {
        // Immutable once loaded
        Ok(self.config.clone())
    }
}
