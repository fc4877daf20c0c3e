/// Hand-written AWS doubles for integration testing
use super::generate_message_id;
use async_trait::async_trait;
use ratchet_mail::MailerError;
use ratchet_mail::email::TemplateRenderer;
use ratchet_mail::services::RawEmailTransport;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock SES raw-send endpoint that records every submitted message
#[derive(Clone, Default)]
pub struct MockSes {
    pub sent: Arc<Mutex<Vec<String>>>,
    pub failure: Arc<Mutex<Option<String>>>,
}

impl MockSes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent send fails with an SES error carrying `message`
    pub fn failing(message: &str) -> Self {
        let ses = Self::new();
        *ses.failure.lock().unwrap() = Some(message.to_string());
        ses
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_sent(&self) -> Option<String> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl RawEmailTransport for MockSes {
    async fn send_raw_email(&self, raw_email: &[u8]) -> Result<String, MailerError> {
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(MailerError::Ses(message));
        }

        self.sent
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(raw_email).to_string());
        Ok(generate_message_id())
    }
}

/// Renderer returning canned output per template name
///
/// `{{key}}` placeholders are replaced with top-level string values from the
/// context so tests can see the context flowing through.
#[derive(Clone, Default)]
pub struct StaticTemplateRenderer {
    templates: HashMap<String, String>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl StaticTemplateRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_template(mut self, name: &str, output: &str) -> Self {
        self.templates.insert(name.to_string(), output.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TemplateRenderer for StaticTemplateRenderer {
    async fn render_remote_template(
        &self,
        template_name: &str,
        context: &Value,
    ) -> Result<String, MailerError> {
        self.calls.lock().unwrap().push(template_name.to_string());

        let template = self.templates.get(template_name).ok_or_else(|| {
            MailerError::Template(format!("Template not found: {}", template_name))
        })?;

        let mut rendered = template.clone();
        if let Some(map) = context.as_object() {
            for (key, value) in map {
                if let Some(value) = value.as_str() {
                    rendered = rendered.replace(&format!("{{{{{}}}}}", key), value);
                }
            }
        }
        Ok(rendered)
    }
}
