//! HTTP handlers for assessment endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::assessment::{
    GetAssessmentHandler, GetAssessmentQuery, SubmitAssessmentCommand, SubmitAssessmentHandler,
};
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;

use super::dto::{
    AssessmentResponse, ErrorResponse, QuestionnaireResponse, SubmitAssessmentRequest,
    SubmitAssessmentResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct AssessmentHandlers {
    submit_handler: Arc<SubmitAssessmentHandler>,
    get_handler: Arc<GetAssessmentHandler>,
}

impl AssessmentHandlers {
    pub fn new(
        submit_handler: Arc<SubmitAssessmentHandler>,
        get_handler: Arc<GetAssessmentHandler>,
    ) -> Self {
        Self {
            submit_handler,
            get_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/submit-assessment - Score, store and deliver a questionnaire
pub async fn submit_assessment(
    State(handlers): State<AssessmentHandlers>,
    payload: Result<Json<SubmitAssessmentRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(request) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected submission body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(rejection.body_text())),
            )
                .into_response();
        }
    };

    let responses = match request.parsed_responses() {
        Ok(responses) => responses,
        Err(key) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request(format!(
                    "Invalid question id: {}",
                    key
                ))),
            )
                .into_response();
        }
    };

    let student = request.student_info;
    let cmd = SubmitAssessmentCommand {
        name: student.name,
        email: student.email,
        grade_level: student.grade_level,
        school: student.school,
        responses,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(result) => {
            let response = SubmitAssessmentResponse {
                success: true,
                results: (&result.assessment).into(),
                assessment_id: result.assessment.id().to_string(),
                email_sent: result.email.is_sent(),
                email_error: result.email.error_message().map(str::to_string),
                sheet_synced: result.sheet.is_sent(),
                sheet_error: result.sheet.error_message().map(str::to_string),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/assessments/:id - Fetch a stored assessment
pub async fn get_assessment(
    State(handlers): State<AssessmentHandlers>,
    Path(assessment_id): Path<String>,
) -> Response {
    let assessment_id = match assessment_id.parse::<AssessmentId>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid assessment ID")),
            )
                .into_response();
        }
    };

    let query = GetAssessmentQuery { assessment_id };

    match handlers.get_handler.handle(query).await {
        Ok(assessment) => {
            (StatusCode::OK, Json(AssessmentResponse::from(&assessment))).into_response()
        }
        Err(e) => handle_assessment_error(e),
    }
}

/// GET /api/questionnaire - The question catalog, rating scale and skills
pub async fn get_questionnaire() -> Json<QuestionnaireResponse> {
    Json(QuestionnaireResponse::build())
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_assessment_error(error: AssessmentError) -> Response {
    match error {
        AssessmentError::NotFound(id) => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Assessment", &id.to_string())),
        )
            .into_response(),
        AssessmentError::ValidationFailed { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::validation(&field, message)),
        )
            .into_response(),
        AssessmentError::Infrastructure(msg) => {
            tracing::error!(error = %msg, "Assessment request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Failed to process assessment")),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let response = handle_assessment_error(AssessmentError::not_found(AssessmentId::new()));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn validation_maps_to_400() {
        let response = handle_assessment_error(AssessmentError::validation("name", "required"));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_maps_to_500() {
        let response = handle_assessment_error(AssessmentError::infrastructure("db down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
