//! Strength and weakness classification over category scores.
//!
//! Lower sums mean better functioning, so strengths are taken from the
//! bottom of the ranking and weaknesses from the top.

use serde::Serialize;

use crate::domain::questionnaire::ExecutiveSkill;

use super::scores::MAX_CATEGORY_SCORE;
use super::CategoryScores;

/// Number of categories reported as strengths.
pub const STRENGTH_COUNT: usize = 3;

/// Number of categories reported as weaknesses.
pub const WEAKNESS_COUNT: usize = 3;

/// A skill paired with its category sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillScore {
    pub skill: ExecutiveSkill,
    pub score: u8,
}

impl SkillScore {
    /// Share of the maximum category score, in percent.
    pub fn percentage(&self) -> f64 {
        self.score as f64 / MAX_CATEGORY_SCORE as f64 * 100.0
    }

    pub fn interpretation(&self) -> Interpretation {
        Interpretation::for_score(self.score)
    }
}

/// Band a single category score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    /// 3-7 points.
    Strong,
    /// 8-14 points.
    Moderate,
    /// 15-21 points.
    NeedsSupport,
}

impl Interpretation {
    pub fn for_score(score: u8) -> Self {
        match score {
            0..=7 => Interpretation::Strong,
            8..=14 => Interpretation::Moderate,
            _ => Interpretation::NeedsSupport,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::Strong => "Strong area",
            Interpretation::Moderate => "Moderate functioning",
            Interpretation::NeedsSupport => "May need support",
        }
    }
}

/// Ranked view of one submission's category scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The lowest-scoring categories, lowest first.
    pub strengths: Vec<ExecutiveSkill>,
    /// The highest-scoring categories, in ascending score order.
    pub weaknesses: Vec<ExecutiveSkill>,
    /// All eleven categories ordered by ascending score.
    pub sorted_scores: Vec<SkillScore>,
}

impl Analysis {
    /// Ranks categories by score.
    ///
    /// The sort is stable: equal scores keep catalog order.
    pub fn analyze(scores: &CategoryScores) -> Self {
        let mut sorted_scores: Vec<SkillScore> = scores
            .iter()
            .map(|(skill, score)| SkillScore { skill, score })
            .collect();
        sorted_scores.sort_by_key(|s| s.score);

        let strengths = sorted_scores
            .iter()
            .take(STRENGTH_COUNT)
            .map(|s| s.skill)
            .collect();
        let weaknesses = sorted_scores
            .iter()
            .skip(sorted_scores.len().saturating_sub(WEAKNESS_COUNT))
            .map(|s| s.skill)
            .collect();

        Self {
            strengths,
            weaknesses,
            sorted_scores,
        }
    }

    pub fn strength_labels(&self) -> Vec<&'static str> {
        self.strengths.iter().map(|s| s.label()).collect()
    }

    pub fn weakness_labels(&self) -> Vec<&'static str> {
        self.weaknesses.iter().map(|s| s.label()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use crate::domain::questionnaire::ExecutiveSkill::*;

    fn scores(values: [u8; 11]) -> CategoryScores {
        CategoryScores::from_values(values).unwrap()
    }

    #[test]
    fn picks_three_lowest_and_three_highest() {
        let analysis = Analysis::analyze(&scores([10, 4, 18, 12, 3, 20, 9, 15, 21, 6, 11]));

        assert_eq!(analysis.strengths, vec![SustainedAttention, WorkingMemory, GoalDirectedPersistence]);
        assert_eq!(analysis.weaknesses, vec![EmotionalControl, TaskInitiation, TimeManagement]);
    }

    #[test]
    fn sorted_scores_are_ascending_and_complete() {
        let analysis = Analysis::analyze(&scores([10, 4, 18, 12, 3, 20, 9, 15, 21, 6, 11]));
        let values: Vec<u8> = analysis.sorted_scores.iter().map(|s| s.score).collect();
        assert_eq!(values, vec![3, 4, 6, 9, 10, 11, 12, 15, 18, 20, 21]);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let analysis = Analysis::analyze(&scores([12; 11]));
        assert_eq!(analysis.strengths, vec![ResponseInhibition, WorkingMemory, EmotionalControl]);
        assert_eq!(analysis.weaknesses, vec![TimeManagement, GoalDirectedPersistence, Metacognition]);
    }

    #[test]
    fn tie_at_the_cut_prefers_earlier_skill() {
        // Three categories share the third-lowest score.
        let analysis = Analysis::analyze(&scores([3, 4, 9, 5, 5, 5, 12, 12, 12, 12, 12]));
        assert_eq!(analysis.strengths, vec![ResponseInhibition, WorkingMemory, Flexibility]);
    }

    #[test]
    fn labels_follow_ranking() {
        let analysis = Analysis::analyze(&scores([10, 4, 18, 12, 3, 20, 9, 15, 21, 6, 11]));
        assert_eq!(
            analysis.strength_labels(),
            vec!["Sustained Attention", "Working Memory", "Goal-Directed Persistence"]
        );
        assert_eq!(
            analysis.weakness_labels(),
            vec!["Emotional Control", "Task Initiation", "Time Management"]
        );
    }

    #[test]
    fn interpretation_bands() {
        assert_eq!(Interpretation::for_score(3), Interpretation::Strong);
        assert_eq!(Interpretation::for_score(7), Interpretation::Strong);
        assert_eq!(Interpretation::for_score(8), Interpretation::Moderate);
        assert_eq!(Interpretation::for_score(14), Interpretation::Moderate);
        assert_eq!(Interpretation::for_score(15), Interpretation::NeedsSupport);
        assert_eq!(Interpretation::for_score(21).label(), "May need support");
    }

    #[test]
    fn percentage_is_share_of_twenty_one() {
        let s = SkillScore { skill: Organization, score: 21 };
        assert!((s.percentage() - 100.0).abs() < f64::EPSILON);
        let s = SkillScore { skill: Organization, score: 7 };
        assert!((s.percentage() - 100.0 / 3.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn strengths_never_outscore_weaknesses(values in proptest::array::uniform11(3u8..=21)) {
            let scores = CategoryScores::from_values(values).unwrap();
            let analysis = Analysis::analyze(&scores);

            prop_assert_eq!(analysis.strengths.len(), STRENGTH_COUNT);
            prop_assert_eq!(analysis.weaknesses.len(), WEAKNESS_COUNT);
            prop_assert_eq!(analysis.sorted_scores.len(), ExecutiveSkill::COUNT);

            let max_strength = analysis.strengths.iter().map(|s| scores.get(*s)).max().unwrap();
            let min_weakness = analysis.weaknesses.iter().map(|s| scores.get(*s)).min().unwrap();
            prop_assert!(max_strength <= min_weakness);

            for skill in &analysis.strengths {
                prop_assert!(!analysis.weaknesses.contains(skill));
            }
        }
    }
}
