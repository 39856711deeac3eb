//! Identifying information submitted with an assessment.

use serde::Serialize;

use crate::domain::foundation::ValidationError;

/// Maximum accepted length of a student name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum accepted length of the free-text grade and school fields.
pub const MAX_FIELD_LEN: usize = 100;

/// Who completed the assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentInfo {
    name: String,
    email: Option<String>,
    grade_level: Option<String>,
    school: String,
}

impl StudentInfo {
    /// Validates and normalizes submitted student fields.
    ///
    /// Blank optional fields become `None`; a blank school falls back to
    /// `default_school`.
    pub fn new(
        name: &str,
        email: Option<&str>,
        grade_level: Option<&str>,
        school: Option<&str>,
        default_school: &str,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::invalid_format(
                "name",
                format!("must be at most {} characters", MAX_NAME_LEN),
            ));
        }

        let email = non_blank(email);
        if let Some(email) = email {
            if !is_plausible_email(email) {
                return Err(ValidationError::invalid_format("email", "not an email address"));
            }
        }

        let grade_level = non_blank(grade_level);
        if grade_level.is_some_and(|g| g.chars().count() > MAX_FIELD_LEN) {
            return Err(ValidationError::invalid_format("gradeLevel", "too long"));
        }

        let school = non_blank(school).unwrap_or(default_school);
        if school.chars().count() > MAX_FIELD_LEN {
            return Err(ValidationError::invalid_format("school", "too long"));
        }

        Ok(Self {
            name: name.to_string(),
            email: email.map(str::to_string),
            grade_level: grade_level.map(str::to_string),
            school: school.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn grade_level(&self) -> Option<&str> {
        self.grade_level.as_deref()
    }

    pub fn school(&self) -> &str {
        &self.school
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !email.contains(char::is_whitespace)
        }
        None => false,
    }
}
