//! In-memory provider that records messages instead of delivering them.
//!
//! Useful for previews, tests, and running the editor without credentials.

use crate::{
    format_recipients, EmailProviderAdapter, ProviderCapabilities, ProviderConfig, ProviderError,
    Result, SendEmailOptions, SendEmailResult,
};
use async_trait::async_trait;
use doc_model::{Clock, SystemClock, Timestamp};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// A message captured by [`OutboxAdapter`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutboxMessage {
    pub message_id: String,
    pub html: String,
    pub options: SendEmailOptions,
    pub sent_at: Timestamp,
}

pub struct OutboxAdapter {
    name: String,
    config: Option<ProviderConfig>,
    clock: Arc<dyn Clock>,
    messages: Mutex<Vec<OutboxMessage>>,
    next_id: AtomicU64,
    /// When set, every send is rejected with this reason
    rejection: Option<String>,
}

impl OutboxAdapter {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_clock(name, Arc::new(SystemClock))
    }

    pub fn with_clock(name: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        Self {
            name: name.into(),
            config: None,
            clock,
            messages: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1),
            rejection: None,
        }
    }

    /// Reject every send with `reason`, as a transport outage would
    pub fn rejecting(mut self, reason: impl Into<String>) -> Self {
        self.rejection = Some(reason.into());
        self
    }

    pub fn config(&self) -> Option<&ProviderConfig> {
        self.config.as_ref()
    }

    /// Messages accepted so far, oldest first
    pub async fn messages(&self) -> Vec<OutboxMessage> {
        self.messages.lock().await.clone()
    }

    /// Remove and return every captured message
    pub async fn drain(&self) -> Vec<OutboxMessage> {
        std::mem::take(&mut *self.messages.lock().await)
    }
}

#[async_trait]
impl EmailProviderAdapter for OutboxAdapter {
    fn name(&self) -> &str {
        &self.name
    }

    fn initialize(&mut self, config: ProviderConfig) -> Result<()> {
        self.check_config(&config)?;
        self.config = Some(config);
        Ok(())
    }

    async fn send_email(&self, html: &str, options: &SendEmailOptions) -> Result<SendEmailResult> {
        if self.config.is_none() {
            return Err(ProviderError::NotInitialized {
                provider: self.name.clone(),
            });
        }
        options.validate()?;

        let now = self.clock.now();
        if let Some(reason) = &self.rejection {
            tracing::warn!(provider = %self.name, "send rejected: {}", reason);
            return Ok(SendEmailResult::failed(reason.clone(), now));
        }

        let message_id = format!(
            "{}_{}",
            self.name.to_lowercase(),
            self.next_id.fetch_add(1, Ordering::SeqCst)
        );
        tracing::info!(
            provider = %self.name,
            to = %format_recipients(&options.to),
            subject = %options.subject,
            "queued email"
        );

        self.messages.lock().await.push(OutboxMessage {
            message_id: message_id.clone(),
            html: html.to_string(),
            options: options.clone(),
            sent_at: now,
        });

        let response = serde_json::json!({ "id": message_id, "status": "queued" });
        Ok(SendEmailResult::sent(message_id, now).with_provider_response(response))
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            templates: true,
            batch_sending: true,
            ..ProviderCapabilities::default()
        }
    }
}
