//! Assessment-specific error types.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | NotFound | 404 |
//! | ValidationFailed | 400 |
//! | Infrastructure | 500 |

use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, ValidationError};

/// Assessment-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// No assessment with this id.
    NotFound(AssessmentId),
    /// Submitted data failed validation.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl AssessmentError {
    pub fn not_found(id: AssessmentId) -> Self {
        AssessmentError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AssessmentError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AssessmentError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AssessmentError::NotFound(id) => format!("Assessment not found: {}", id),
            AssessmentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AssessmentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed
            | ErrorCode::EmptyField
            | ErrorCode::OutOfRange
            | ErrorCode::InvalidFormat => AssessmentError::ValidationFailed {
                field: err
                    .details
                    .get("field")
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string()),
                message: err.message,
            },
            _ => AssessmentError::Infrastructure(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_converts_with_field() {
        let err: AssessmentError = ValidationError::empty_field("name").into();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(matches!(err, AssessmentError::ValidationFailed { ref field, .. } if field == "name"));
    }

    #[test]
    fn database_error_becomes_infrastructure() {
        let err: AssessmentError = DomainError::database("connection refused").into();
        assert!(matches!(err, AssessmentError::Infrastructure(_)));
        assert_eq!(err.code(), ErrorCode::DatabaseError);
    }

    #[test]
    fn not_found_message_includes_id() {
        let id = AssessmentId::new();
        assert_eq!(
            AssessmentError::not_found(id).message(),
            format!("Assessment not found: {}", id)
        );
    }
}
