//! Webhook Sheet Exporter - posts assessment rows to a spreadsheet web app.
//!
//! The receiving side is a Google Apps Script deployed as a web app that
//! appends each posted JSON object as a row.

use async_trait::async_trait;
use chrono_tz::Tz;
use reqwest::Client;
use std::time::Duration;

use crate::config::SheetsConfig;
use crate::ports::{AssessmentReport, DeliveryOutcome, SheetExporter};

use super::payload::SheetRow;

/// Reason reported when no webhook URL is configured.
pub const NOT_CONFIGURED: &str =
    "Google Sheets webhook not configured. Please set GOOGLE_SHEETS_WEBHOOK_URL environment variable.";

/// Spreadsheet webhook client.
pub struct WebhookSheetExporter {
    webhook_url: Option<String>,
    time_zone: Tz,
    client: Client,
}

impl WebhookSheetExporter {
    /// Creates a new exporter.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(
        webhook_url: Option<String>,
        time_zone: Tz,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            webhook_url,
            time_zone,
            client,
        })
    }

    pub fn from_config(config: &SheetsConfig) -> Result<Self, reqwest::Error> {
        Self::new(
            config.webhook_url().map(str::to_string),
            config.time_zone,
            config.timeout(),
        )
    }

    async fn post(&self, url: &str, row: &SheetRow) -> DeliveryOutcome {
        tracing::debug!(student = %row.student_name, "Sending assessment row to spreadsheet");

        let response = match self.client.post(url).json(row).send().await {
            Ok(response) => response,
            Err(e) => {
                return DeliveryOutcome::failed(format!("Google Sheets webhook error: {}", e))
            }
        };

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if status.is_success() {
            tracing::info!(response = %body, "Assessment row exported");
            DeliveryOutcome::Sent
        } else {
            tracing::error!(status = %status, body = %body, "Spreadsheet webhook rejected row");
            DeliveryOutcome::failed(format!("HTTP {}: {}", status.as_u16(), body))
        }
    }
}

#[async_trait]
impl SheetExporter for WebhookSheetExporter {
    async fn export(&self, report: &AssessmentReport) -> DeliveryOutcome {
        match &self.webhook_url {
            Some(url) => {
                let row = SheetRow::from_report(report, self.time_zone);
                self.post(url, &row).await
            }
            None => {
                tracing::debug!("Spreadsheet webhook not configured, skipping export");
                DeliveryOutcome::skipped(NOT_CONFIGURED)
            }
        }
    }
}
