//! Spreadsheet adapters - row formatting and webhook delivery.

mod payload;
mod webhook_exporter;

pub use payload::{SheetRow, TIMESTAMP_FORMAT};
pub use webhook_exporter::{WebhookSheetExporter, NOT_CONFIGURED};
