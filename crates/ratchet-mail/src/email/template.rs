/// Remote template rendering port
use crate::error::MailerError;
use async_trait::async_trait;
use serde_json::Value;

#[cfg(test)]
use mockall::mock;

/// Renders a named template against a context
///
/// Implementations live outside this crate (a rendering service, a Lambda,
/// a template bucket plus engine). Failures are surfaced to callers as-is.
#[async_trait]
pub trait TemplateRenderer: Send + Sync {
    async fn render_remote_template(
        &self,
        template_name: &str,
        context: &Value,
    ) -> Result<String, MailerError>;
}

#[cfg(test)]
mock! {
    pub TemplateRenderer {}

    #[async_trait]
    impl TemplateRenderer for TemplateRenderer {
        async fn render_remote_template(&self, template_name: &str, context: &Value) -> Result<String, MailerError>;
    }
}
