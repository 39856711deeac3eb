//! GetAssessmentHandler - Query handler for retrieving a stored assessment.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::AssessmentId;
use crate::ports::AssessmentRepository;

/// Query to get an assessment by ID.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub assessment_id: AssessmentId,
}

/// Handler for retrieving assessments.
pub struct GetAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetAssessmentQuery) -> Result<Assessment, AssessmentError> {
        self.repository
            .find_by_id(&query.assessment_id)
            .await?
            .ok_or_else(|| AssessmentError::not_found(query.assessment_id))
    }
}
