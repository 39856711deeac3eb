//! Rating value object for the seven-point agreement scale.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Agreement with a questionnaire statement: 1 (strongly disagree) to 7
/// (strongly agree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 7;

    /// Creates a Rating, returning error if out of range.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        Self::try_from_i64("rating", value as i64)
    }

    /// Creates a Rating from any integer, naming `field` in the error.
    pub fn try_from_i64(field: &str, value: i64) -> Result<Self, ValidationError> {
        if (Self::MIN as i64..=Self::MAX as i64).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(ValidationError::out_of_range(
                field,
                Self::MIN as i32,
                Self::MAX as i32,
                value.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ))
        }
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self.0 {
            1 => "Strongly disagree",
            2 => "Disagree",
            3 => "Tend to disagree",
            4 => "Neutral",
            5 => "Tend to agree",
            6 => "Agree",
            _ => "Strongly agree",
        }
    }

    /// All seven points of the scale, lowest first.
    pub fn scale() -> impl Iterator<Item = Rating> {
        (Self::MIN..=Self::MAX).map(Rating)
    }
}

impl TryFrom<u8> for Rating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
