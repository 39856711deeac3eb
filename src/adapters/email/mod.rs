//! Email adapters - report rendering and Resend delivery.

mod resend_mailer;
mod template;

pub use resend_mailer::{ResendConfig, ResendMailer, NOT_CONFIGURED};
pub use template::{escape_html, ReportTemplate};
