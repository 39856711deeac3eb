//! SubmitAssessmentHandler - Command handler for scoring and delivering a
//! completed questionnaire.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError, ResponseSet, StudentInfo};
use crate::ports::{
    AssessmentReport, AssessmentRepository, DeliveryOutcome, DeliveryRecord, ReportMailer,
    SheetExporter,
};

/// Command to submit a completed questionnaire.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentCommand {
    pub name: String,
    pub email: Option<String>,
    pub grade_level: Option<String>,
    pub school: Option<String>,
    /// Raw answers keyed by question id.
    pub responses: BTreeMap<u8, i64>,
}

/// Result of a successful submission.
///
/// The assessment is always persisted; delivery outcomes are reported
/// separately and never fail the submission.
#[derive(Debug, Clone)]
pub struct SubmitAssessmentResult {
    pub assessment: Assessment,
    pub email: DeliveryOutcome,
    pub sheet: DeliveryOutcome,
}

/// Handler for submitting assessments.
pub struct SubmitAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    mailer: Arc<dyn ReportMailer>,
    sheets: Arc<dyn SheetExporter>,
    default_school: String,
}

impl SubmitAssessmentHandler {
    pub fn new(
        repository: Arc<dyn AssessmentRepository>,
        mailer: Arc<dyn ReportMailer>,
        sheets: Arc<dyn SheetExporter>,
        default_school: impl Into<String>,
    ) -> Self {
        Self {
            repository,
            mailer,
            sheets,
            default_school: default_school.into(),
        }
    }

    pub async fn handle(
        &self,
        cmd: SubmitAssessmentCommand,
    ) -> Result<SubmitAssessmentResult, AssessmentError> {
        // 1. Validate input
        let student = StudentInfo::new(
            &cmd.name,
            cmd.email.as_deref(),
            cmd.grade_level.as_deref(),
            cmd.school.as_deref(),
            &self.default_school,
        )?;
        let responses = ResponseSet::from_answers(&cmd.responses)?;

        // 2. Score
        let assessment = Assessment::submit(student, responses);

        // 3. Persist
        self.repository.save(&assessment).await?;
        tracing::info!(
            assessment_id = %assessment.id(),
            overall_score = assessment.overall_score(),
            "Assessment saved"
        );

        // 4. Deliver
        let report = AssessmentReport::new(assessment);
        let (email, sheet) = tokio::join!(
            self.mailer.send_report(&report),
            self.sheets.export(&report)
        );
        log_outcome("email", &email);
        log_outcome("sheet", &sheet);

        // 5. Log the email attempt
        let record = DeliveryRecord::from_outcome(
            *report.assessment().id(),
            self.mailer.primary_recipient(),
            report.subject(),
            &email,
        );
        if let Err(e) = self.repository.record_delivery(&record).await {
            tracing::warn!(
                assessment_id = %record.assessment_id,
                error = %e,
                "Failed to record email delivery"
            );
        }

        Ok(SubmitAssessmentResult {
            assessment: report.assessment().clone(),
            email,
            sheet,
        })
    }
}

fn log_outcome(channel: &str, outcome: &DeliveryOutcome) {
    match outcome {
        DeliveryOutcome::Sent => tracing::debug!(channel, "Report delivered"),
        DeliveryOutcome::Skipped { reason } => {
            tracing::debug!(channel, reason = %reason, "Report delivery skipped")
        }
        DeliveryOutcome::Failed { error } => {
            tracing::warn!(channel, error = %error, "Report delivery failed")
        }
    }
}
