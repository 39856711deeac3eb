//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence
//!
//! - `AssessmentRepository` - Stores assessments and the delivery log
//!
//! ## Delivery
//!
//! - `ReportMailer` - Emails the formatted report
//! - `SheetExporter` - Appends a row to an external spreadsheet

mod assessment_repository;
mod delivery;
mod report;
mod report_mailer;
mod sheet_exporter;

pub use assessment_repository::AssessmentRepository;
pub use delivery::{DeliveryOutcome, DeliveryRecord, DeliveryStatus};
pub use report::{AssessmentReport, ReportRow, REPORT_TITLE};
pub use report_mailer::ReportMailer;
pub use sheet_exporter::SheetExporter;
