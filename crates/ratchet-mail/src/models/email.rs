/// Outbound email domain models
use crate::email::mime::detect_content_type;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// One outbound message prior to transmission
///
/// Built by the caller, optionally completed by
/// [`Mailer::fill_email_body`](crate::Mailer::fill_email_body), then handed
/// once to [`Mailer::send_email`](crate::Mailer::send_email).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadyToSendEmail {
    /// Overrides the configured default sender when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_address: Option<String>,
    pub destination_addresses: Vec<String>,
    #[serde(default)]
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txt_message: Option<String>,
    #[serde(default)]
    pub attachments: Vec<EmailAttachment>,
}

impl ReadyToSendEmail {
    pub fn new<I, S>(destination_addresses: I, subject: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            destination_addresses: destination_addresses.into_iter().map(Into::into).collect(),
            subject: subject.into(),
            ..Default::default()
        }
    }

    pub fn with_from(mut self, from_address: impl Into<String>) -> Self {
        self.from_address = Some(from_address.into());
        self
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html_message = Some(html.into());
        self
    }

    pub fn with_txt(mut self, txt: impl Into<String>) -> Self {
        self.txt_message = Some(txt.into());
        self
    }

    pub fn with_attachment(mut self, attachment: EmailAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// True when neither an HTML nor a text body carries content
    pub fn is_body_empty(&self) -> bool {
        let blank = |part: &Option<String>| part.as_deref().is_none_or(str::is_empty);
        blank(&self.html_message) && blank(&self.txt_message)
    }
}

/// Attachment whose payload is already base64 encoded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailAttachment {
    filename: String,
    content_type: String,
    base64_data: String,
}

impl EmailAttachment {
    pub fn new(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        base64_data: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            base64_data: base64_data.into(),
        }
    }

    /// Encodes raw bytes and infers the content type from the filename extension
    pub fn from_bytes(filename: impl Into<String>, data: &[u8]) -> Self {
        let filename = filename.into();
        let content_type = detect_content_type(&filename).to_string();
        Self {
            base64_data: STANDARD.encode(data),
            filename,
            content_type,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn base64_data(&self) -> &str {
        &self.base64_data
    }
}
