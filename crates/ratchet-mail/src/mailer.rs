/// Mailer - fills template bodies and sends raw messages through SES
use crate::email::composer::assemble_raw_message;
use crate::email::template::TemplateRenderer;
use crate::error::MailerError;
use crate::models::{MailerConfig, ReadyToSendEmail, SendOutcome};
use crate::services::config::ConfigProvider;
use crate::services::ses::RawEmailTransport;
use crate::utils::logging::{redact_body, redact_recipients, redact_subject};
use crate::utils::validation;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Composes and delivers outbound email
///
/// Holds only immutable configuration and shared collaborators, so one
/// instance can serve concurrent sends without locking.
pub struct Mailer {
    transport: Arc<dyn RawEmailTransport>,
    renderer: Option<Arc<dyn TemplateRenderer>>,
    config: MailerConfig,
}

impl Mailer {
    /// Creates a mailer, rejecting an invalid configuration up front
    pub fn new(
        transport: Arc<dyn RawEmailTransport>,
        config: MailerConfig,
    ) -> Result<Self, MailerError> {
        config
            .validate()
            .map_err(|e| MailerError::Config(format!("Invalid configuration: {}", e)))?;

        Ok(Self {
            transport,
            renderer: None,
            config,
        })
    }

    /// Creates a mailer from whatever configuration `provider` supplies
    pub async fn from_provider(
        transport: Arc<dyn RawEmailTransport>,
        provider: &dyn ConfigProvider,
    ) -> Result<Self, MailerError> {
        let config = provider.get_config().await?;
        Self::new(transport, config)
    }

    /// Enables [`fill_email_body`](Self::fill_email_body)
    pub fn with_renderer(mut self, renderer: Arc<dyn TemplateRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    pub fn config(&self) -> &MailerConfig {
        &self.config
    }

    /// Renders the HTML and optional text templates into `email`
    ///
    /// Both renders run concurrently. Without a text template the text body is
    /// cleared, so repeated calls give the same result. Renderer failures are
    /// returned unchanged. The same message is returned for chaining.
    ///
    /// `email` is only written once both renders succeed: if either fails,
    /// neither body is touched, even when the HTML render completed.
    #[tracing::instrument(
        name = "mailer.fill_email_body",
        skip_all,
        fields(html_template = %html_template_name, txt_template = ?txt_template_name)
    )]
    pub async fn fill_email_body<'a>(
        &self,
        email: &'a mut ReadyToSendEmail,
        context: &Value,
        html_template_name: &str,
        txt_template_name: Option<&str>,
    ) -> Result<&'a mut ReadyToSendEmail, MailerError> {
        let renderer = self.renderer.as_ref().ok_or_else(|| {
            MailerError::Config("Template renderer not configured".to_string())
        })?;

        let html = renderer.render_remote_template(html_template_name, context);
        let txt = async {
            match txt_template_name.filter(|name| !name.is_empty()) {
                Some(name) => renderer
                    .render_remote_template(name, context)
                    .await
                    .map(Some),
                None => Ok(None),
            }
        };

        let (html, txt) = futures::future::try_join(html, txt).await?;

        debug!(
            html = %redact_body(&html),
            txt = ?txt.as_deref().map(redact_body),
            "Rendered email body"
        );

        email.html_message = Some(html);
        email.txt_message = txt;
        Ok(email)
    }

    /// Assembles and submits `email` in a single attempt
    ///
    /// Never returns an error: any assembly or transport failure is logged
    /// and reported as [`SendOutcome::Failed`].
    #[tracing::instrument(
        name = "mailer.send_email",
        skip(self, email),
        fields(
            recipients = email.destination_addresses.len(),
            attachments = email.attachments.len()
        )
    )]
    pub async fn send_email(&self, email: &ReadyToSendEmail) -> SendOutcome {
        if email.is_body_empty() {
            warn!("Sending email with neither an HTML nor a text body");
        }

        match self.try_send(email).await {
            Ok(message_id) => {
                info!(
                    message_id = %message_id,
                    to = %redact_recipients(&email.destination_addresses),
                    subject = %redact_subject(&email.subject),
                    "Email delivered"
                );
                SendOutcome::Delivered { message_id }
            }
            Err(e) => {
                error!(
                    error = %e,
                    to = %redact_recipients(&email.destination_addresses),
                    subject = %redact_subject(&email.subject),
                    "Error while processing email"
                );
                SendOutcome::Failed {
                    cause: e.to_string(),
                }
            }
        }
    }

    async fn try_send(&self, email: &ReadyToSendEmail) -> Result<String, MailerError> {
        let raw = assemble_raw_message(
            email,
            self.resolve_sender(email),
            &self.config.auto_bcc_addresses,
        )?;

        self.transport.send_raw_email(raw.as_bytes()).await
    }

    /// Message sender first, configured default second
    fn resolve_sender<'a>(&'a self, email: &'a ReadyToSendEmail) -> Option<&'a str> {
        email
            .from_address
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(self.config.default_sending_address.as_deref())
    }

    /// Advisory address check, see [`validation::valid_email`]
    pub fn valid_email(email: Option<&str>) -> bool {
        validation::valid_email(email)
    }
}
