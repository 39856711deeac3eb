//! Assessment aggregate.
//!
//! One completed questionnaire. Scores and analysis are derived once at
//! submission and the aggregate is never modified afterwards.

use crate::domain::foundation::{AssessmentId, Timestamp};

use super::{Analysis, CategoryScores, ResponseSet, StudentInfo};

/// A scored submission.
///
/// # Invariants
///
/// - `scores` is `CategoryScores::calculate(&responses)`
/// - `analysis` is `Analysis::analyze(&scores)`
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    id: AssessmentId,
    student: StudentInfo,
    responses: ResponseSet,
    scores: CategoryScores,
    analysis: Analysis,
    completed_at: Timestamp,
}

impl Assessment {
    /// Scores a new submission.
    pub fn submit(student: StudentInfo, responses: ResponseSet) -> Self {
        Self::score(AssessmentId::new(), student, responses, Timestamp::now())
    }

    /// Rebuilds a stored assessment, re-deriving scores from the responses.
    pub fn reconstitute(
        id: AssessmentId,
        student: StudentInfo,
        responses: ResponseSet,
        completed_at: Timestamp,
    ) -> Self {
        Self::score(id, student, responses, completed_at)
    }

    fn score(
        id: AssessmentId,
        student: StudentInfo,
        responses: ResponseSet,
        completed_at: Timestamp,
    ) -> Self {
        let scores = CategoryScores::calculate(&responses);
        let analysis = Analysis::analyze(&scores);
        Self {
            id,
            student,
            responses,
            scores,
            analysis,
            completed_at,
        }
    }

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn student(&self) -> &StudentInfo {
        &self.student
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn scores(&self) -> &CategoryScores {
        &self.scores
    }

    pub fn analysis(&self) -> &Analysis {
        &self.analysis
    }

    /// Returns when the questionnaire was submitted.
    pub fn completed_at(&self) -> &Timestamp {
        &self.completed_at
    }

    /// Rounded mean of the eleven category scores.
    pub fn overall_score(&self) -> u8 {
        self.scores.overall_score()
    }
}
