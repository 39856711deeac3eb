//! Row format posted to the spreadsheet webhook.

use chrono_tz::Tz;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::questionnaire::ExecutiveSkill;
use crate::ports::AssessmentReport;

/// Display format of the `timestamp` column, e.g. `01/15/2024, 10:05 AM`.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y, %I:%M %p";

/// One spreadsheet row.
///
/// Serializes as a flat camelCase object: student columns, `q1`..`q33`,
/// one column per skill, then the summary columns.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetRow {
    pub timestamp: String,
    pub student_name: String,
    pub student_email: String,
    pub grade_level: String,
    pub school: String,
    pub responses: Vec<u8>,
    pub category_scores: Vec<(ExecutiveSkill, u8)>,
    pub overall_score: u8,
    pub strengths: Vec<&'static str>,
    pub weaknesses: Vec<&'static str>,
}

impl SheetRow {
    pub fn from_report(report: &AssessmentReport, time_zone: Tz) -> Self {
        let assessment = report.assessment();
        let student = assessment.student();
        Self {
            timestamp: assessment
                .completed_at()
                .format_in(&time_zone, TIMESTAMP_FORMAT),
            student_name: student.name().to_string(),
            student_email: student.email().unwrap_or_default().to_string(),
            grade_level: student.grade_level().unwrap_or_default().to_string(),
            school: student.school().to_string(),
            responses: assessment.responses().values(),
            category_scores: assessment.scores().iter().collect(),
            overall_score: assessment.overall_score(),
            strengths: report.strength_labels(),
            weaknesses: report.weakness_labels(),
        }
    }
}

impl Serialize for SheetRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("timestamp", &self.timestamp)?;
        map.serialize_entry("studentName", &self.student_name)?;
        map.serialize_entry("studentEmail", &self.student_email)?;
        map.serialize_entry("gradeLevel", &self.grade_level)?;
        map.serialize_entry("school", &self.school)?;
        for (idx, value) in self.responses.iter().enumerate() {
            map.serialize_entry(&format!("q{}", idx + 1), value)?;
        }
        for (skill, score) in &self.category_scores {
            map.serialize_entry(skill.camel_key(), score)?;
        }
        map.serialize_entry("overallScore", &self.overall_score)?;
        map.serialize_entry("strengths", &self.strengths.join(", "))?;
        map.serialize_entry("weaknesses", &self.weaknesses.join(", "))?;
        map.serialize_entry("strengthCount", &self.strengths.len())?;
        map.serialize_entry("weaknessCount", &self.weaknesses.len())?;
        map.end()
    }
}
