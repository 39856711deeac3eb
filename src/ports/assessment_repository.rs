//! Assessment repository port.
//!
//! Persists scored assessments and the log of report delivery attempts.

use async_trait::async_trait;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError};

use super::DeliveryRecord;

/// Repository port for Assessment persistence.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Save a new assessment.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Find an assessment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError>;

    /// Append one entry to the delivery log.
    async fn record_delivery(&self, record: &DeliveryRecord) -> Result<(), DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Trait object safety test
    #[test]
    fn assessment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AssessmentRepository) {}
    }
}
