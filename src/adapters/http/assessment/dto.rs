//! HTTP DTOs for assessment endpoints.
//!
//! Field names are camelCase to match the existing browser client.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{Analysis, Assessment, CategoryScores, StudentInfo};
use crate::domain::foundation::Rating;
use crate::domain::questionnaire::{questions, ExecutiveSkill};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Student details as entered on the form.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfoRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub grade_level: Option<String>,
    #[serde(default)]
    pub school: Option<String>,
}

/// Request to submit a completed questionnaire.
///
/// `responses` is keyed by question id as a string ("1".."33").
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentRequest {
    #[serde(default)]
    pub student_info: StudentInfoRequest,
    #[serde(default)]
    pub responses: HashMap<String, i64>,
}

impl SubmitAssessmentRequest {
    /// Parses the response keys into question ids.
    ///
    /// Returns the first key that is not a valid integer id.
    pub fn parsed_responses(&self) -> Result<BTreeMap<u8, i64>, String> {
        self.responses
            .iter()
            .map(|(key, value)| {
                key.trim()
                    .parse::<u8>()
                    .map(|id| (id, *value))
                    .map_err(|_| key.clone())
            })
            .collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentInfoResponse {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    pub school: String,
}

impl From<&StudentInfo> for StudentInfoResponse {
    fn from(student: &StudentInfo) -> Self {
        Self {
            name: student.name().to_string(),
            email: student.email().map(str::to_string),
            grade_level: student.grade_level().map(str::to_string),
            school: student.school().to_string(),
        }
    }
}

/// One entry of the ranked score list.
#[derive(Debug, Clone, Serialize)]
pub struct SortedScoreResponse {
    pub skill: String,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub sorted_scores: Vec<SortedScoreResponse>,
}

impl From<&Analysis> for AnalysisResponse {
    fn from(analysis: &Analysis) -> Self {
        Self {
            strengths: labels(&analysis.strengths),
            weaknesses: labels(&analysis.weaknesses),
            sorted_scores: analysis
                .sorted_scores
                .iter()
                .map(|s| SortedScoreResponse {
                    skill: s.skill.label().to_string(),
                    score: s.score,
                })
                .collect(),
        }
    }
}

fn labels(skills: &[ExecutiveSkill]) -> Vec<String> {
    skills.iter().map(|s| s.label().to_string()).collect()
}

/// Scored results of one assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResultsResponse {
    pub student_info: StudentInfoResponse,
    /// Keyed by snake_case skill key.
    pub category_scores: CategoryScores,
    pub analysis: AnalysisResponse,
}

impl From<&Assessment> for AssessmentResultsResponse {
    fn from(assessment: &Assessment) -> Self {
        Self {
            student_info: assessment.student().into(),
            category_scores: *assessment.scores(),
            analysis: assessment.analysis().into(),
        }
    }
}

/// Response to a submission.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitAssessmentResponse {
    pub success: bool,
    pub results: AssessmentResultsResponse,
    pub assessment_id: String,
    pub email_sent: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_error: Option<String>,
    pub sheet_synced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_error: Option<String>,
}

/// A stored assessment.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResponse {
    pub assessment_id: String,
    pub completed_at: String,
    pub overall_score: u8,
    /// Answers keyed by question id.
    pub responses: BTreeMap<u8, u8>,
    pub results: AssessmentResultsResponse,
}

impl From<&Assessment> for AssessmentResponse {
    fn from(assessment: &Assessment) -> Self {
        Self {
            assessment_id: assessment.id().to_string(),
            completed_at: assessment.completed_at().to_rfc3339(),
            overall_score: assessment.overall_score(),
            responses: assessment
                .responses()
                .iter()
                .map(|(id, rating)| (id, rating.value()))
                .collect(),
            results: assessment.into(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Questionnaire DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: u8,
    pub text: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScaleLabelResponse {
    pub value: u8,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub key: &'static str,
    pub label: &'static str,
    pub question_ids: [u8; 3],
}

/// The full questionnaire for rendering the form.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireResponse {
    pub questions: Vec<QuestionResponse>,
    pub scale: Vec<ScaleLabelResponse>,
    pub skills: Vec<SkillResponse>,
}

impl QuestionnaireResponse {
    pub fn build() -> Self {
        Self {
            questions: questions()
                .iter()
                .map(|q| QuestionResponse {
                    id: q.id,
                    text: q.text,
                    category: q.category.key(),
                })
                .collect(),
            scale: Rating::scale()
                .map(|r| ScaleLabelResponse {
                    value: r.value(),
                    label: r.label(),
                })
                .collect(),
            skills: ExecutiveSkill::ALL
                .iter()
                .map(|s| SkillResponse {
                    key: s.key(),
                    label: s.label(),
                    question_ids: s.question_ids(),
                })
                .collect(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            error_code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self {
            error_code: "VALIDATION_FAILED".to_string(),
            message: message.into(),
            details: Some(serde_json::json!({ "field": field })),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            error_code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error_code: "INTERNAL_ERROR".to_string(),
            message: message.into(),
            details: None,
        }
    }
}
