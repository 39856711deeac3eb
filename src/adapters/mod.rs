//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST API (axum)
//! - `postgres` - Assessment persistence (sqlx)
//! - `memory` - In-process persistence for development and tests
//! - `email` - Report delivery through the Resend API
//! - `sheets` - Row export to a spreadsheet webhook

pub mod email;
pub mod http;
pub mod memory;
pub mod postgres;
pub mod sheets;

pub use email::{ReportTemplate, ResendConfig, ResendMailer};
pub use memory::InMemoryAssessmentRepository;
pub use postgres::PostgresAssessmentRepository;
pub use sheets::WebhookSheetExporter;
