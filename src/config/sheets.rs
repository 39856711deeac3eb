//! Spreadsheet webhook configuration

use chrono_tz::Tz;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Spreadsheet webhook configuration (Google Apps Script web app)
#[derive(Debug, Clone, Deserialize)]
pub struct SheetsConfig {
    /// Webhook URL; rows are not exported without one
    pub webhook_url: Option<String>,

    /// IANA time zone for human-readable timestamps
    #[serde(default = "default_time_zone")]
    pub time_zone: Tz,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl SheetsConfig {
    /// Webhook URL, if configured.
    pub fn webhook_url(&self) -> Option<&str> {
        self.webhook_url.as_deref().filter(|u| !u.is_empty())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate spreadsheet configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = self.webhook_url() {
            if !url.starts_with("https://") && !url.starts_with("http://") {
                return Err(ValidationError::InvalidWebhookUrl);
            }
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            time_zone: default_time_zone(),
            timeout_secs: default_timeout(),
        }
    }
}

/// US Eastern, with daylight saving time.
fn default_time_zone() -> Tz {
    Tz::America__New_York
}

fn default_timeout() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheets_config_defaults() {
        let config = SheetsConfig::default();
        assert_eq!(config.webhook_url(), None);
        assert_eq!(config.time_zone, Tz::America__New_York);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_non_http_url() {
        let config = SheetsConfig {
            webhook_url: Some("ftp://sheets.example.org".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidWebhookUrl)
        ));
    }

    #[test]
    fn test_time_zone_deserializes_from_iana_name() {
        let config: SheetsConfig =
            serde_json::from_str(r#"{"time_zone": "America/Chicago"}"#).unwrap();
        assert_eq!(config.time_zone, Tz::America__Chicago);
        assert!(serde_json::from_str::<SheetsConfig>(r#"{"time_zone": "Mars/Olympus"}"#).is_err());
    }
}
