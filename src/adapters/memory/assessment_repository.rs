//! In-Memory Assessment Repository
//!
//! Keeps assessments and delivery log entries in process memory.
//! Used when no database is configured and in tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::{AssessmentRepository, DeliveryRecord};

/// In-memory storage for assessments
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    assessments: Arc<RwLock<HashMap<AssessmentId, Assessment>>>,
    deliveries: Arc<RwLock<Vec<DeliveryRecord>>>,
}

impl InMemoryAssessmentRepository {
    /// Create a new in-memory repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored assessments
    pub async fn assessment_count(&self) -> usize {
        self.assessments.read().await.len()
    }

    /// Delivery log entries for one assessment, oldest first
    pub async fn deliveries_for(&self, id: &AssessmentId) -> Vec<DeliveryRecord> {
        self.deliveries
            .read()
            .await
            .iter()
            .filter(|r| &r.assessment_id == id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
        let mut assessments = self.assessments.write().await;
        if assessments.contains_key(assessment.id()) {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                format!("Assessment already exists: {}", assessment.id()),
            ));
        }
        assessments.insert(*assessment.id(), assessment.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
        Ok(self.assessments.read().await.get(id).cloned())
    }

    async fn record_delivery(&self, record: &DeliveryRecord) -> Result<(), DomainError> {
        if !self.assessments.read().await.contains_key(&record.assessment_id) {
            return Err(DomainError::new(
                ErrorCode::AssessmentNotFound,
                format!("Assessment not found: {}", record.assessment_id),
            ));
        }
        self.deliveries.write().await.push(record.clone());
        Ok(())
    }
}
