//! Assessment defaults

use serde::Deserialize;

use super::error::ValidationError;

/// Assessment configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AssessmentConfig {
    /// School recorded when a submission leaves it blank
    #[serde(default = "default_school")]
    pub default_school: String,
}

impl AssessmentConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_school.trim().is_empty() {
            return Err(ValidationError::MissingRequired("ASSESSMENT__DEFAULT_SCHOOL"));
        }
        Ok(())
    }
}

impl Default for AssessmentConfig {
    fn default() -> Self {
        Self {
            default_school: default_school(),
        }
    }
}

fn default_school() -> String {
    "BCS Saints".to_string()
}
