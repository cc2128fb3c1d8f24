//! Provider adapter trait.
//!
//! An adapter wraps one delivery transport. Callers hand it rendered HTML
//! plus [`SendEmailOptions`]; template sends go through the HTML export
//! engine first.

use crate::{ProviderCapabilities, ProviderConfig, Result, SendEmailOptions, SendEmailResult};
use async_trait::async_trait;
use doc_model::Template;
use email_export::{render_html_with, ExportOptions};

/// A delivery transport for rendered emails.
///
/// Adapters must be `Send + Sync` so a registry can be shared across tasks.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use providers::{EmailProviderAdapter, ProviderConfig, Result, SendEmailOptions, SendEmailResult};
///
/// struct Webhook { config: Option<ProviderConfig> }
///
/// #[async_trait]
/// impl EmailProviderAdapter for Webhook {
///     fn name(&self) -> &str { "Webhook" }
///
///     fn initialize(&mut self, config: ProviderConfig) -> Result<()> {
///         self.check_config(&config)?;
///         self.config = Some(config);
///         Ok(())
///     }
///
///     fn validate_config(&self, config: &ProviderConfig) -> bool {
///         !config.api_key.is_empty() && config.endpoint.is_some()
///     }
///
///     async fn send_email(&self, html: &str, options: &SendEmailOptions) -> Result<SendEmailResult> {
///         // POST `html` to the configured endpoint...
///     }
/// }
/// ```
#[async_trait]
pub trait EmailProviderAdapter: Send + Sync {
    /// Display name; registries key adapters by its lowercase form
    fn name(&self) -> &str;

    /// Store `config` for later sends. Fails when the config is invalid.
    fn initialize(&mut self, config: ProviderConfig) -> Result<()>;

    /// Whether `config` carries everything this provider needs.
    ///
    /// The default only requires an API key.
    fn validate_config(&self, config: &ProviderConfig) -> bool {
        !config.api_key.is_empty()
    }

    /// Send pre-rendered HTML.
    ///
    /// Returns `Err` for caller mistakes (not initialized, bad options) and
    /// `Ok` with `success == false` when the transport rejects the message.
    async fn send_email(&self, html: &str, options: &SendEmailOptions) -> Result<SendEmailResult>;

    /// Render `template` with default export options and send it
    async fn send_template_email(
        &self,
        template: &Template,
        options: &SendEmailOptions,
    ) -> Result<SendEmailResult> {
        self.send_template_email_with(template, &ExportOptions::default(), options)
            .await
    }

    /// Render `template` with `export` options and send it
    async fn send_template_email_with(
        &self,
        template: &Template,
        export: &ExportOptions,
        options: &SendEmailOptions,
    ) -> Result<SendEmailResult> {
        let html = render_html_with(template, export);
        self.send_email(&html, options).await
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::default()
    }

    /// `Err(InvalidConfig)` unless [`validate_config`](Self::validate_config) accepts `config`
    fn check_config(&self, config: &ProviderConfig) -> Result<()> {
        if self.validate_config(config) {
            Ok(())
        } else {
            Err(crate::ProviderError::InvalidConfig {
                provider: self.name().to_string(),
            })
        }
    }
}
