//! Value types exchanged with provider adapters

use crate::{ProviderError, Result};
use doc_model::Timestamp;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Provider credentials and endpoint settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// API key or authentication token
    #[serde(default)]
    pub api_key: String,
    /// Sending domain, for providers that need one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Custom API endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Provider-specific options
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Default::default()
        }
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }
}

/// An address with an optional display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecipient {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl EmailRecipient {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
        }
    }

    pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: Some(name.into()),
        }
    }
}

impl fmt::Display for EmailRecipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.email),
            None => write!(f, "{}", self.email),
        }
    }
}

/// Format a recipient list as `a, Name <b>`
pub fn format_recipients(recipients: &[EmailRecipient]) -> String {
    recipients
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Accepts either a single recipient object or an array of them
fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<EmailRecipient>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(EmailRecipient),
        Many(Vec<EmailRecipient>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(recipient) => vec![recipient],
        OneOrMany::Many(recipients) => recipients,
    })
}

/// A file attached to an outgoing message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAttachment {
    /// Base64-encoded content
    pub content: String,
    pub filename: String,
    /// MIME type
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Content id for inline attachments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingOptions {
    #[serde(default)]
    pub opens: bool,
    #[serde(default)]
    pub clicks: bool,
}

/// Everything about a message except its HTML body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailOptions {
    pub subject: String,
    pub from: EmailRecipient,
    #[serde(deserialize_with = "one_or_many")]
    pub to: Vec<EmailRecipient>,
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub cc: Vec<EmailRecipient>,
    #[serde(default, deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub bcc: Vec<EmailRecipient>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<EmailRecipient>,
    /// Plain-text alternative body
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<EmailAttachment>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub headers: IndexMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<TrackingOptions>,
    /// Values for provider-side template substitution
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub variables: serde_json::Map<String, serde_json::Value>,
}

impl SendEmailOptions {
    pub fn new(subject: impl Into<String>, from: EmailRecipient, to: EmailRecipient) -> Self {
        Self {
            subject: subject.into(),
            from,
            to: vec![to],
            cc: Vec::new(),
            bcc: Vec::new(),
            reply_to: None,
            text: None,
            attachments: Vec::new(),
            headers: IndexMap::new(),
            tracking: None,
            variables: serde_json::Map::new(),
        }
    }

    pub fn add_to(mut self, recipient: EmailRecipient) -> Self {
        self.to.push(recipient);
        self
    }

    pub fn with_cc(mut self, recipient: EmailRecipient) -> Self {
        self.cc.push(recipient);
        self
    }

    pub fn with_bcc(mut self, recipient: EmailRecipient) -> Self {
        self.bcc.push(recipient);
        self
    }

    pub fn with_reply_to(mut self, recipient: EmailRecipient) -> Self {
        self.reply_to = Some(recipient);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_attachment(mut self, attachment: EmailAttachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_tracking(mut self, tracking: TrackingOptions) -> Self {
        self.tracking = Some(tracking);
        self
    }

    /// Check the fields every transport needs
    pub fn validate(&self) -> Result<()> {
        if self.to.is_empty() {
            return Err(ProviderError::InvalidOptions("no recipients".to_string()));
        }
        let addresses = std::iter::once(&self.from)
            .chain(&self.to)
            .chain(&self.cc)
            .chain(&self.bcc)
            .chain(self.reply_to.as_ref());
        for recipient in addresses {
            if recipient.email.trim().is_empty() {
                return Err(ProviderError::InvalidOptions("empty email address".to_string()));
            }
        }
        Ok(())
    }
}

/// Outcome of a send attempt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Raw response from the transport
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_response: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: Timestamp,
}

impl SendEmailResult {
    /// A successful send
    pub fn sent(message_id: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            success: true,
            message_id: Some(message_id.into()),
            provider_response: None,
            error: None,
            timestamp,
        }
    }

    /// A send the transport rejected
    pub fn failed(error: impl Into<String>, timestamp: Timestamp) -> Self {
        Self {
            success: false,
            message_id: None,
            provider_response: None,
            error: Some(error.into()),
            timestamp,
        }
    }

    pub fn with_provider_response(mut self, response: serde_json::Value) -> Self {
        self.provider_response = Some(response);
        self
    }
}

/// Features a provider supports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderCapabilities {
    pub templates: bool,
    pub attachments: bool,
    pub track_opens: bool,
    pub track_clicks: bool,
    pub scheduling: bool,
    pub batch_sending: bool,
    pub custom_headers: bool,
    pub amp_email: bool,
    /// Provider-specific capabilities
    #[serde(flatten)]
    pub extra: BTreeMap<String, bool>,
}

impl Default for ProviderCapabilities {
    fn default() -> Self {
        Self {
            templates: false,
            attachments: true,
            track_opens: false,
            track_clicks: false,
            scheduling: false,
            batch_sending: false,
            custom_headers: true,
            amp_email: false,
            extra: BTreeMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from() -> EmailRecipient {
        EmailRecipient::named("news@acme.test", "Acme")
    }

    #[test]
    fn test_recipient_display() {
        assert_eq!(from().to_string(), "Acme <news@acme.test>");
        assert_eq!(EmailRecipient::new("a@b.test").to_string(), "a@b.test");
        assert_eq!(
            format_recipients(&[from(), EmailRecipient::new("a@b.test")]),
            "Acme <news@acme.test>, a@b.test"
        );
    }

    #[test]
    fn test_single_or_list_recipients() {
        let json = r#"{
            "subject": "Hi",
            "from": {"email": "news@acme.test"},
            "to": {"email": "a@b.test"},
            "cc": [{"email": "c@d.test", "name": "C"}, {"email": "e@f.test"}],
            "replyTo": {"email": "reply@acme.test"}
        }"#;
        let options: SendEmailOptions = serde_json::from_str(json).unwrap();
        assert_eq!(options.to, vec![EmailRecipient::new("a@b.test")]);
        assert_eq!(options.cc.len(), 2);
        assert!(options.bcc.is_empty());
        assert_eq!(options.reply_to, Some(EmailRecipient::new("reply@acme.test")));
    }

    #[test]
    fn test_validate_options() {
        let options = SendEmailOptions::new("Hi", from(), EmailRecipient::new("a@b.test"));
        assert!(options.validate().is_ok());

        let mut no_to = options.clone();
        no_to.to.clear();
        assert!(matches!(no_to.validate(), Err(ProviderError::InvalidOptions(_))));

        let blank_cc = options.with_cc(EmailRecipient::new("  "));
        assert!(blank_cc.validate().is_err());
    }

    #[test]
    fn test_config_keeps_extra_fields() {
        let config: ProviderConfig =
            serde_json::from_str(r#"{"apiKey": "key", "domain": "mg.acme.test", "sandbox": true}"#)
                .unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.domain.as_deref(), Some("mg.acme.test"));
        assert_eq!(config.extra.get("sandbox"), Some(&serde_json::Value::Bool(true)));
    }

    #[test]
    fn test_capabilities_wire_names() {
        let mut caps = ProviderCapabilities::default();
        caps.extra.insert("webhooks".to_string(), true);
        let value = serde_json::to_value(&caps).unwrap();
        assert_eq!(value["trackOpens"], false);
        assert_eq!(value["customHeaders"], true);
        assert_eq!(value["webhooks"], true);
    }
}
