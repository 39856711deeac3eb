//! Report view handed to delivery adapters.

use crate::domain::assessment::{Assessment, Interpretation, MAX_CATEGORY_SCORE};

/// Title used for emails and page headings.
pub const REPORT_TITLE: &str = "Executive Skills Assessment Results";

/// One line of the score table, already labelled for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: &'static str,
    pub score: u8,
    pub max_score: u8,
    pub percentage: f64,
    pub interpretation: Interpretation,
}

/// A scored assessment plus the labelled views templates render.
#[derive(Debug, Clone)]
pub struct AssessmentReport {
    assessment: Assessment,
}

impl AssessmentReport {
    pub fn new(assessment: Assessment) -> Self {
        Self { assessment }
    }

    pub fn assessment(&self) -> &Assessment {
        &self.assessment
    }

    pub fn student_name(&self) -> &str {
        self.assessment.student().name()
    }

    /// "Executive Skills Assessment Results - {student name}".
    pub fn subject(&self) -> String {
        format!("{} - {}", REPORT_TITLE, self.student_name())
    }

    pub fn strength_labels(&self) -> Vec<&'static str> {
        self.assessment.analysis().strength_labels()
    }

    pub fn weakness_labels(&self) -> Vec<&'static str> {
        self.assessment.analysis().weakness_labels()
    }

    /// All eleven categories, lowest score first.
    pub fn rows(&self) -> Vec<ReportRow> {
        self.assessment
            .analysis()
            .sorted_scores
            .iter()
            .map(|s| ReportRow {
                label: s.skill.label(),
                score: s.score,
                max_score: MAX_CATEGORY_SCORE,
                percentage: s.percentage(),
                interpretation: s.interpretation(),
            })
            .collect()
    }
}
