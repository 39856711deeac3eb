//! HTTP routes for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_assessment, get_questionnaire, submit_assessment, AssessmentHandlers};

/// Creates the assessment router, mounted under `/api`.
///
/// # Routes
/// - `GET /questionnaire` - Question catalog and rating scale
/// - `POST /submit-assessment` - Score, store and deliver a submission
/// - `GET /assessments/:id` - Fetch a stored assessment
pub fn assessment_routes(handlers: AssessmentHandlers) -> Router {
    Router::new()
        .route("/questionnaire", get(get_questionnaire))
        .route("/submit-assessment", post(submit_assessment))
        .route("/assessments/:id", get(get_assessment))
        .with_state(handlers)
}
