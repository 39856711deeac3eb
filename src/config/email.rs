//! Email configuration

use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Email configuration (Resend)
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// Resend API key; reports are not emailed without one
    pub resend_api_key: Option<Secret<String>>,

    /// From email address
    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// From name
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Report recipients (comma-separated)
    #[serde(default = "default_recipients")]
    pub recipients: String,

    /// Reply-To address
    #[serde(default = "default_reply_to")]
    pub reply_to: String,

    /// Resend API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl EmailConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    /// Get recipients as a vector
    pub fn recipients_list(&self) -> Vec<String> {
        self.recipients
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// API key, if one is configured.
    pub fn api_key(&self) -> Option<&Secret<String>> {
        self.resend_api_key
            .as_ref()
            .filter(|k| !k.expose_secret().is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate email configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(key) = self.api_key() {
            if !key.expose_secret().starts_with("re_") {
                return Err(ValidationError::InvalidResendKey);
            }
        }
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        let recipients = self.recipients_list();
        if recipients.is_empty() {
            return Err(ValidationError::MissingRequired("EMAIL__RECIPIENTS"));
        }
        for address in recipients.iter().chain(std::iter::once(&self.reply_to)) {
            if !address.contains('@') {
                return Err(ValidationError::InvalidRecipient(address.clone()));
            }
        }
        if !self.api_base_url.starts_with("https://") && !self.api_base_url.starts_with("http://")
        {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            from_email: default_from_email(),
            from_name: default_from_name(),
            recipients: default_recipients(),
            reply_to: default_reply_to(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@bcssaints.org".to_string()
}

fn default_from_name() -> String {
    "Executive Skills Assessment".to_string()
}

fn default_recipients() -> String {
    "mjackson@bcssaints.org,forms@bcssaints.org".to_string()
}

fn default_reply_to() -> String {
    "mjackson@bcssaints.org".to_string()
}

fn default_api_base_url() -> String {
    "https://api.resend.com".to_string()
}

fn default_timeout() -> u64 {
    15
}
