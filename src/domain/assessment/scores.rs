//! Category score aggregation.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::domain::foundation::{Rating, ValidationError};
use crate::domain::questionnaire::ExecutiveSkill;

use super::ResponseSet;

/// Lowest possible category sum (three answers of 1).
pub const MIN_CATEGORY_SCORE: u8 = Rating::MIN * ExecutiveSkill::QUESTIONS_PER_SKILL;

/// Highest possible category sum (three answers of 7).
pub const MAX_CATEGORY_SCORE: u8 = Rating::MAX * ExecutiveSkill::QUESTIONS_PER_SKILL;

/// Sum of the three answers for each of the eleven skills.
///
/// Every sum lies in `MIN_CATEGORY_SCORE..=MAX_CATEGORY_SCORE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryScores([u8; ExecutiveSkill::COUNT]);

impl CategoryScores {
    /// Sums each skill's three answers.
    pub fn calculate(responses: &ResponseSet) -> Self {
        let mut sums = [0u8; ExecutiveSkill::COUNT];
        for skill in ExecutiveSkill::ALL {
            sums[skill.index()] = skill
                .question_ids()
                .iter()
                .filter_map(|&id| responses.get(id))
                .map(|r| r.value())
                .sum();
        }
        Self(sums)
    }

    /// Rebuilds scores from stored sums in catalog order.
    pub fn from_values(values: [u8; ExecutiveSkill::COUNT]) -> Result<Self, ValidationError> {
        for (skill, &score) in ExecutiveSkill::ALL.iter().zip(values.iter()) {
            if !(MIN_CATEGORY_SCORE..=MAX_CATEGORY_SCORE).contains(&score) {
                return Err(ValidationError::out_of_range(
                    skill.key(),
                    MIN_CATEGORY_SCORE as i32,
                    MAX_CATEGORY_SCORE as i32,
                    score as i32,
                ));
            }
        }
        Ok(Self(values))
    }

    pub fn get(&self, skill: ExecutiveSkill) -> u8 {
        self.0[skill.index()]
    }

    /// `(skill, score)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ExecutiveSkill, u8)> + '_ {
        ExecutiveSkill::ALL.into_iter().map(move |s| (s, self.get(s)))
    }

    /// Sum of all eleven category scores.
    pub fn total(&self) -> u16 {
        self.0.iter().map(|&s| s as u16).sum()
    }

    /// Mean category score, rounded half up.
    pub fn overall_score(&self) -> u8 {
        let n = ExecutiveSkill::COUNT as u16;
        ((self.total() * 2 + n) / (2 * n)) as u8
    }

    pub fn values(&self) -> [u8; ExecutiveSkill::COUNT] {
        self.0
    }
}

/// Serializes as a `skill_key -> score` object in catalog order.
impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ExecutiveSkill::COUNT))?;
        for (skill, score) in self.iter() {
            map.serialize_entry(skill.key(), &score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::super::responses::fixtures::{answers_with, uniform};
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn score_bounds_follow_scale() {
        assert_eq!(MIN_CATEGORY_SCORE, 3);
        assert_eq!(MAX_CATEGORY_SCORE, 21);
    }

    #[test]
    fn sums_three_answers_per_skill() {
        // Question n answers (n - 1) % 7 + 1, so skill k gets known triples.
        let responses =
            ResponseSet::from_answers(&answers_with(|id| ((id - 1) % 7 + 1) as i64)).unwrap();
        let scores = CategoryScores::calculate(&responses);

        assert_eq!(scores.get(ExecutiveSkill::ResponseInhibition), 1 + 2 + 3);
        assert_eq!(scores.get(ExecutiveSkill::WorkingMemory), 4 + 5 + 6);
        assert_eq!(scores.get(ExecutiveSkill::EmotionalControl), 7 + 1 + 2);
        assert_eq!(scores.get(ExecutiveSkill::Metacognition), 3 + 4 + 5);
    }

    #[test]
    fn uniform_answers_give_uniform_scores() {
        let scores = CategoryScores::calculate(&uniform(4));
        assert!(scores.iter().all(|(_, s)| s == 12));
        assert_eq!(scores.total(), 132);
        assert_eq!(scores.overall_score(), 12);
    }

    #[test]
    fn overall_score_rounds_to_nearest() {
        // 50 / 11 = 4.55
        let up = CategoryScores::from_values([5, 5, 5, 5, 5, 5, 4, 4, 4, 4, 4]).unwrap();
        assert_eq!(up.total(), 50);
        assert_eq!(up.overall_score(), 5);

        // 49 / 11 = 4.45
        let down = CategoryScores::from_values([5, 5, 5, 5, 5, 4, 4, 4, 4, 4, 4]).unwrap();
        assert_eq!(down.total(), 49);
        assert_eq!(down.overall_score(), 4);
    }

    #[test]
    fn from_values_rejects_impossible_sums() {
        let mut values = [12u8; ExecutiveSkill::COUNT];
        values[4] = 22;
        let err = CategoryScores::from_values(values).unwrap_err();
        assert_eq!(err.field(), "sustained_attention");

        values[4] = 2;
        assert!(CategoryScores::from_values(values).is_err());
    }

    #[test]
    fn serializes_as_ordered_key_map() {
        let json = serde_json::to_string(&CategoryScores::calculate(&uniform(1))).unwrap();
        assert!(json.starts_with("{\"response_inhibition\":3,\"working_memory\":3"));
        assert!(json.ends_with("\"metacognition\":3}"));
    }

    proptest! {
        #[test]
        fn every_sum_stays_within_bounds(values in proptest::collection::vec(1i64..=7, 33)) {
            let answers = answers_with(|id| values[id as usize - 1]);
            let scores = CategoryScores::calculate(&ResponseSet::from_answers(&answers).unwrap());
            for (_, score) in scores.iter() {
                prop_assert!((MIN_CATEGORY_SCORE..=MAX_CATEGORY_SCORE).contains(&score));
            }
            let total: i64 = values.iter().sum();
            prop_assert_eq!(scores.total() as i64, total);
        }
    }
}
