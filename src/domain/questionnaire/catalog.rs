//! The fixed 33-item questionnaire.
//!
//! Items are adapted from the executive skills self-rating scale in
//! "Smart but Scattered Teens" (Dawson & Guare).

use serde::Serialize;

use super::ExecutiveSkill;
use super::ExecutiveSkill::*;

/// Number of items in the questionnaire.
pub const QUESTION_COUNT: usize = 33;

/// One immutable questionnaire item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: u8,
    pub text: &'static str,
    pub category: ExecutiveSkill,
}

const fn q(id: u8, text: &'static str, category: ExecutiveSkill) -> Question {
    Question { id, text, category }
}

static QUESTIONS: [Question; QUESTION_COUNT] = [
    q(1, "I act on impulse.", ResponseInhibition),
    q(2, "I get in trouble for talking too much in class.", ResponseInhibition),
    q(3, "I say things without thinking.", ResponseInhibition),
    q(4, "I say, \"I'll do it later\" and then forget about it.", WorkingMemory),
    q(5, "I forget homework assignments or forget to take home needed materials.", WorkingMemory),
    q(6, "I lose or misplace belongings such as coats, gloves, sports equipment, etc.", WorkingMemory),
    q(7, "I get annoyed when homework is too hard or confusing or takes too long to finish.", EmotionalControl),
    q(8, "I have a short fuse—am easily frustrated.", EmotionalControl),
    q(9, "I get upset when things don't go as planned.", EmotionalControl),
    q(10, "If the first solution to a problem doesn't work, I have trouble thinking of a different one.", Flexibility),
    q(11, "I get upset when I have to change plans or routines.", Flexibility),
    q(12, "I have problems with open-ended homework assignments (e.g., deciding what to write about when given a creative writing assignment).", Flexibility),
    q(13, "I have difficulty paying attention and am easily distracted.", SustainedAttention),
    q(14, "I run out of steam before finishing homework or other tasks.", SustainedAttention),
    q(15, "I have problems sticking with schoolwork or chores until they are done.", SustainedAttention),
    q(16, "I put off homework or chores until the last minute.", TaskInitiation),
    q(17, "I have difficulty setting aside fun activities in order to start homework.", TaskInitiation),
    q(18, "I need to be reminded to start chores or homework.", TaskInitiation),
    q(19, "I have trouble planning for big assignments (knowing what to do first, second, etc.).", PlanningPrioritizing),
    q(20, "I have difficulty setting priorities when I have a lot of things to do.", PlanningPrioritizing),
    q(21, "I become overwhelmed by long-term projects or big assignments.", PlanningPrioritizing),
    q(22, "My backpack and notebooks aren't organized.", Organization),
    q(23, "My desk or workspace at home or school is a mess.", Organization),
    q(24, "I have trouble keeping my bedroom or locker tidy.", Organization),
    q(25, "I have a hard time estimating how long it takes to do something (such as homework).", TimeManagement),
    q(26, "I often don't finish homework at night and may rush to get it done in school before class.", TimeManagement),
    q(27, "I need a lot of time to get ready for things (e.g., appointments, school, changing classes).", TimeManagement),
    q(28, "I can't seem to save up money for a desired object—problems delaying gratification.", GoalDirectedPersistence),
    q(29, "I don't see the point of earning good grades to achieve a long-term goal.", GoalDirectedPersistence),
    q(30, "I prefer to live in the present.", GoalDirectedPersistence),
    q(31, "I don't have very effective study strategies.", Metacognition),
    q(32, "I tend not to check my work for mistakes even when the stakes are high.", Metacognition),
    q(33, "I don't evaluate my performance and change tactics to increase success.", Metacognition),
];

/// The whole catalog, ordered by id.
pub fn questions() -> &'static [Question] {
    &QUESTIONS
}

/// Looks up a question by its 1-based id.
pub fn question(id: u8) -> Option<&'static Question> {
    (id as usize)
        .checked_sub(1)
        .and_then(|idx| QUESTIONS.get(idx))
}

/// Questions scored into `skill`, in id order.
pub fn questions_for(skill: ExecutiveSkill) -> impl Iterator<Item = &'static Question> {
    QUESTIONS.iter().filter(move |q| q.category == skill)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_thirty_three_sequential_ids() {
        let ids: Vec<u8> = questions().iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=33).collect::<Vec<u8>>());
    }

    #[test]
    fn every_skill_has_exactly_its_three_questions() {
        for skill in ExecutiveSkill::ALL {
            let ids: Vec<u8> = questions_for(skill).map(|q| q.id).collect();
            assert_eq!(ids, skill.question_ids().to_vec(), "skill {:?}", skill);
        }
    }

    #[test]
    fn question_lookup_is_one_based() {
        assert_eq!(question(1).unwrap().text, "I act on impulse.");
        assert_eq!(question(33).unwrap().category, ExecutiveSkill::Metacognition);
        assert!(question(0).is_none());
        assert!(question(34).is_none());
    }

    #[test]
    fn question_texts_are_non_empty() {
        assert!(questions().iter().all(|q| !q.text.trim().is_empty()));
    }
}
