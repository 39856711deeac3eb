//! Delivery outcomes and the delivery log entry.

use crate::domain::foundation::{AssessmentId, Timestamp};

/// Result of one attempt to deliver a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Accepted by the remote service.
    Sent,
    /// Not attempted because the channel is not configured.
    Skipped { reason: String },
    /// Attempted and failed.
    Failed { error: String },
}

impl DeliveryOutcome {
    pub fn skipped(reason: impl Into<String>) -> Self {
        DeliveryOutcome::Skipped {
            reason: reason.into(),
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        DeliveryOutcome::Failed {
            error: error.into(),
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, DeliveryOutcome::Sent)
    }

    /// Message explaining why the report was not delivered.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            DeliveryOutcome::Sent => None,
            DeliveryOutcome::Skipped { reason } => Some(reason),
            DeliveryOutcome::Failed { error } => Some(error),
        }
    }
}

/// Stored status of a delivery attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStatus {
    Success,
    Error,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Success => "success",
            DeliveryStatus::Error => "error",
        }
    }
}

/// One row of the email delivery log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryRecord {
    pub assessment_id: AssessmentId,
    pub recipient: String,
    pub subject: String,
    pub status: DeliveryStatus,
    pub error_message: Option<String>,
    pub attempted_at: Timestamp,
}

impl DeliveryRecord {
    /// Builds a log entry from an outcome. Skipped deliveries are logged as errors.
    pub fn from_outcome(
        assessment_id: AssessmentId,
        recipient: impl Into<String>,
        subject: impl Into<String>,
        outcome: &DeliveryOutcome,
    ) -> Self {
        let status = if outcome.is_sent() {
            DeliveryStatus::Success
        } else {
            DeliveryStatus::Error
        };
        Self {
            assessment_id,
            recipient: recipient.into(),
            subject: subject.into(),
            status,
            error_message: outcome.error_message().map(str::to_string),
            attempted_at: Timestamp::now(),
        }
    }
}
