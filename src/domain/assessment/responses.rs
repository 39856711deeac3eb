//! The 33 validated answers of one submission.

use std::collections::BTreeMap;

use crate::domain::foundation::{Rating, ValidationError};
use crate::domain::questionnaire::QUESTION_COUNT;

/// Exactly one rating for every question id 1..=33.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseSet([Rating; QUESTION_COUNT]);

impl ResponseSet {
    /// Builds a response set from `question id -> raw value` answers.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` on `responses` when the answer count is not 33
    /// - `OutOfRange` on `responses` for an id outside 1..=33
    /// - `OutOfRange` on `q{id}` for a value outside 1..=7
    pub fn from_answers(answers: &BTreeMap<u8, i64>) -> Result<Self, ValidationError> {
        if answers.len() != QUESTION_COUNT {
            return Err(ValidationError::invalid_format(
                "responses",
                format!(
                    "expected {} answers, got {}",
                    QUESTION_COUNT,
                    answers.len()
                ),
            ));
        }

        let mut ratings = [None; QUESTION_COUNT];
        for (&id, &value) in answers {
            let slot = (id as usize)
                .checked_sub(1)
                .and_then(|idx| ratings.get_mut(idx))
                .ok_or_else(|| {
                    ValidationError::out_of_range("responses", 1, QUESTION_COUNT as i32, id as i32)
                })?;
            *slot = Some(Rating::try_from_i64(&format!("q{}", id), value)?);
        }

        let ratings: Vec<Rating> = ratings
            .into_iter()
            .enumerate()
            .map(|(idx, rating)| {
                rating.ok_or_else(|| ValidationError::empty_field(format!("q{}", idx + 1)))
            })
            .collect::<Result<_, _>>()?;

        ratings.try_into().map(Self).map_err(|_: Vec<Rating>| {
            ValidationError::invalid_format("responses", "incomplete answer set")
        })
    }

    /// Rebuilds a response set from stored values ordered by question id.
    pub fn from_values(values: &[u8]) -> Result<Self, ValidationError> {
        if values.len() > QUESTION_COUNT {
            return Err(ValidationError::invalid_format(
                "responses",
                format!("expected {} answers, got {}", QUESTION_COUNT, values.len()),
            ));
        }
        let answers: BTreeMap<u8, i64> = values
            .iter()
            .enumerate()
            .map(|(idx, &v)| (idx as u8 + 1, v as i64))
            .collect();
        Self::from_answers(&answers)
    }

    /// Rating given to question `id`, if `id` is in 1..=33.
    pub fn get(&self, id: u8) -> Option<Rating> {
        (id as usize).checked_sub(1).and_then(|idx| self.0.get(idx)).copied()
    }

    /// `(question id, rating)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, Rating)> + '_ {
        self.0.iter().enumerate().map(|(idx, r)| (idx as u8 + 1, *r))
    }

    /// Raw values in id order.
    pub fn values(&self) -> Vec<u8> {
        self.0.iter().map(|r| r.value()).collect()
    }
}
