//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    GetAssessmentHandler, GetAssessmentQuery, SubmitAssessmentCommand, SubmitAssessmentHandler,
    SubmitAssessmentResult,
};
