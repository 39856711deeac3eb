//! Sheet exporter port - appends an assessment as a spreadsheet row.

use async_trait::async_trait;

use super::{AssessmentReport, DeliveryOutcome};

/// Port for exporting assessments to an external spreadsheet.
#[async_trait]
pub trait SheetExporter: Send + Sync {
    /// Export one row for the report's assessment.
    async fn export(&self, report: &AssessmentReport) -> DeliveryOutcome;
}
