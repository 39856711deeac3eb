//! Assessment command and query handlers.

mod get_assessment;
mod submit_assessment;

pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use submit_assessment::{
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
