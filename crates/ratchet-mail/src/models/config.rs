/// Configuration models
use crate::utils::validation::contains_line_break;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Construction-time mailer configuration, immutable for the mailer's lifetime
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, TypedBuilder)]
pub struct MailerConfig {
    /// Sender used when a message carries no `from_address`
    #[builder(default, setter(into, strip_option))]
    #[serde(default)]
    pub default_sending_address: Option<String>,
    /// Silently copied on every outbound message, never shown in `To`
    #[builder(default)]
    #[serde(default)]
    pub auto_bcc_addresses: Vec<String>,
}

impl MailerConfig {
    /// Rejects addresses that are blank or would break out of their header
    ///
    /// Address syntax is not checked; SES is the judge of what it accepts.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(sender) = &self.default_sending_address
            && !usable_address(sender)
        {
            return Err(format!("Invalid default sending address: {:?}", sender));
        }

        for bcc in &self.auto_bcc_addresses {
            if !usable_address(bcc) {
                return Err(format!("Invalid auto-BCC address: {:?}", bcc));
            }
        }

        Ok(())
    }
}

fn usable_address(address: &str) -> bool {
    !address.trim().is_empty() && !contains_line_break(address)
}
