//! Report mailer port - emails the formatted assessment report.

use async_trait::async_trait;

use super::{AssessmentReport, DeliveryOutcome};

/// Port for emailing assessment reports to staff.
///
/// Delivery never returns an error: failures and missing configuration are
/// reported through [`DeliveryOutcome`] so a submission is never lost to a
/// mail outage.
#[async_trait]
pub trait ReportMailer: Send + Sync {
    /// Send the report to the configured recipients.
    async fn send_report(&self, report: &AssessmentReport) -> DeliveryOutcome;

    /// Address recorded in the delivery log for each attempt.
    fn primary_recipient(&self) -> &str;
}
