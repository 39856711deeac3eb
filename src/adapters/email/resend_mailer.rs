//! Resend Mailer - Implementation of ReportMailer over the Resend HTTP API.
//!
//! # Configuration
//!
//! ```ignore
//! let mailer = ResendMailer::new(ResendConfig::from(&app_config.email), template)?;
//! ```
//!
//! Without an API key every send returns `DeliveryOutcome::Skipped`.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::EmailConfig;
use crate::ports::{AssessmentReport, DeliveryOutcome, ReportMailer};

use super::template::ReportTemplate;

/// Reason reported when no API key is configured.
pub const NOT_CONFIGURED: &str =
    "Email service not configured. Please set RESEND_API_KEY environment variable.";

/// Configuration for the Resend mailer.
#[derive(Debug, Clone)]
pub struct ResendConfig {
    api_key: Option<Secret<String>>,
    /// "Name <address>" sender.
    pub from: String,
    pub to: Vec<String>,
    pub reply_to: String,
    /// Base URL for the API (default: https://api.resend.com).
    pub base_url: String,
    pub timeout: Duration,
}

impl ResendConfig {
    /// Creates a configuration for the given recipients with no API key.
    pub fn new(from: impl Into<String>, to: Vec<String>, reply_to: impl Into<String>) -> Self {
        Self {
            api_key: None,
            from: from.into(),
            to,
            reply_to: reply_to.into(),
            base_url: "https://api.resend.com".to_string(),
            timeout: Duration::from_secs(15),
        }
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<&EmailConfig> for ResendConfig {
    fn from(config: &EmailConfig) -> Self {
        let mut resend = ResendConfig::new(
            config.from_header(),
            config.recipients_list(),
            config.reply_to.clone(),
        )
        .with_base_url(config.api_base_url.clone())
        .with_timeout(config.timeout());
        resend.api_key = config.api_key().cloned();
        resend
    }
}

/// Resend request body.
#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: String,
    html: String,
    reply_to: &'a str,
}

/// Resend success body.
#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

/// Resend error body.
#[derive(Debug, Deserialize)]
struct ResendErrorBody {
    message: Option<String>,
}

/// Resend email API client.
pub struct ResendMailer {
    config: ResendConfig,
    template: ReportTemplate,
    client: Client,
}

impl ResendMailer {
    /// Creates a new mailer.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built.
    pub fn new(config: ResendConfig, template: ReportTemplate) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            config,
            template,
            client,
        })
    }

    fn emails_url(&self) -> String {
        format!("{}/emails", self.config.base_url.trim_end_matches('/'))
    }

    async fn send(&self, api_key: &str, report: &AssessmentReport) -> DeliveryOutcome {
        let body = SendEmailRequest {
            from: &self.config.from,
            to: &self.config.to,
            subject: report.subject(),
            html: self.template.render(report),
            reply_to: &self.config.reply_to,
        };

        let response = match self
            .client
            .post(self.emails_url())
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                return DeliveryOutcome::failed(format!(
                    "Email service error: timed out after {}s",
                    self.config.timeout.as_secs()
                ))
            }
            Err(e) => return DeliveryOutcome::failed(format!("Email service error: {}", e)),
        };

        let status = response.status();
        if status.is_success() {
            let id = response
                .json::<SendEmailResponse>()
                .await
                .ok()
                .and_then(|r| r.id);
            tracing::info!(email_id = ?id, subject = %body.subject, "Report email sent");
            return DeliveryOutcome::Sent;
        }

        let error_body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ResendErrorBody>(&error_body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| "Failed to send email".to_string());
        tracing::error!(status = %status, body = %error_body, "Resend rejected report email");
        DeliveryOutcome::failed(message)
    }
}

#[async_trait]
impl ReportMailer for ResendMailer {
    async fn send_report(&self, report: &AssessmentReport) -> DeliveryOutcome {
        match &self.config.api_key {
            Some(key) => self.send(key.expose_secret(), report).await,
            None => {
                tracing::debug!("RESEND_API_KEY not provided, skipping report email");
                DeliveryOutcome::skipped(NOT_CONFIGURED)
            }
        }
    }

    fn primary_recipient(&self) -> &str {
        self.config
            .to
            .first()
            .map(String::as_str)
            .unwrap_or(self.config.reply_to.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{fixtures, Assessment, StudentInfo};
    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured {
        requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    }

    /// Starts a local stand-in for the Resend API answering with `status` and `reply`.
    async fn stub_resend(status: StatusCode, reply: Value) -> (String, Captured) {
        let captured = Captured::default();
        let app = Router::new()
            .route(
                "/emails",
                post(
                    move |State(c): State<Captured>, headers: HeaderMap, Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            let auth = headers
                                .get("authorization")
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string);
                            c.requests.lock().unwrap().push((auth, body));
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(captured.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{}", addr), captured)
    }

    fn config() -> ResendConfig {
        ResendConfig::new(
            "Executive Skills Assessment <noreply@bcssaints.org>",
            vec![
                "mjackson@bcssaints.org".to_string(),
                "forms@bcssaints.org".to_string(),
            ],
            "mjackson@bcssaints.org",
        )
    }

    fn template() -> ReportTemplate {
        ReportTemplate::new(chrono_tz::Tz::America__New_York, "mjackson@bcssaints.org", "BCS Saints")
    }

    fn report() -> AssessmentReport {
        let student = StudentInfo::new("Jamie Ortiz", None, Some("11th"), None, "BCS Saints")
            .unwrap();
        AssessmentReport::new(Assessment::submit(student, fixtures::uniform(4)))
    }

    #[tokio::test]
    async fn skips_without_api_key() {
        let mailer = ResendMailer::new(config(), template()).unwrap();
        assert_eq!(
            mailer.send_report(&report()).await,
            DeliveryOutcome::skipped(NOT_CONFIGURED)
        );
    }

    #[tokio::test]
    async fn posts_report_with_bearer_auth() {
        let (url, captured) = stub_resend(StatusCode::OK, json!({ "id": "email_123" })).await;
        let mailer = ResendMailer::new(
            config().with_api_key("re_test").with_base_url(url),
            template(),
        )
        .unwrap();

        let outcome = mailer.send_report(&report()).await;
        assert_eq!(outcome, DeliveryOutcome::Sent);

        let requests = captured.requests.lock().unwrap().clone();
        assert_eq!(requests.len(), 1);
        let (auth, body) = &requests[0];
        assert_eq!(auth.as_deref(), Some("Bearer re_test"));
        assert_eq!(
            body["from"],
            "Executive Skills Assessment <noreply@bcssaints.org>"
        );
        assert_eq!(
            body["to"],
            json!(["mjackson@bcssaints.org", "forms@bcssaints.org"])
        );
        assert_eq!(body["reply_to"], "mjackson@bcssaints.org");
        assert_eq!(
            body["subject"],
            "Executive Skills Assessment Results - Jamie Ortiz"
        );
        assert!(body["html"].as_str().unwrap().contains("Jamie Ortiz"));
    }

    #[tokio::test]
    async fn reports_api_error_message() {
        let (url, _) = stub_resend(
            StatusCode::UNPROCESSABLE_ENTITY,
            json!({ "statusCode": 422, "message": "Invalid `from` field." }),
        )
        .await;
        let mailer = ResendMailer::new(
            config().with_api_key("re_test").with_base_url(url),
            template(),
        )
        .unwrap();

        assert_eq!(
            mailer.send_report(&report()).await,
            DeliveryOutcome::failed("Invalid `from` field.")
        );
    }

    #[tokio::test]
    async fn falls_back_to_generic_message() {
        let (url, _) = stub_resend(StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;
        let mailer = ResendMailer::new(
            config().with_api_key("re_test").with_base_url(url),
            template(),
        )
        .unwrap();

        assert_eq!(
            mailer.send_report(&report()).await,
            DeliveryOutcome::failed("Failed to send email")
        );
    }

    #[tokio::test]
    async fn connection_failure_is_reported() {
        let mailer = ResendMailer::new(
            config()
                .with_api_key("re_test")
                .with_base_url("http://127.0.0.1:1"),
            template(),
        )
        .unwrap();

        let outcome = mailer.send_report(&report()).await;
        assert!(outcome
            .error_message()
            .unwrap()
            .starts_with("Email service error"));
    }

    #[test]
    fn primary_recipient_is_first_address() {
        let mailer = ResendMailer::new(config(), template()).unwrap();
        assert_eq!(mailer.primary_recipient(), "mjackson@bcssaints.org");
    }

    #[test]
    fn from_email_config_copies_key() {
        let email = EmailConfig {
            resend_api_key: Some(Secret::new("re_abc".to_string())),
            ..Default::default()
        };
        let resend = ResendConfig::from(&email);
        assert_eq!(
            resend.api_key.as_ref().map(|k| k.expose_secret().as_str()),
            Some("re_abc")
        );
        assert_eq!(resend.to.len(), 2);
    }
}
