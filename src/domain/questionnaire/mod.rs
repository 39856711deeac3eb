//! Questionnaire module - the fixed item catalog and skill categories.

mod catalog;
mod skill;

pub use catalog::{question, questions, questions_for, Question, QUESTION_COUNT};
pub use skill::ExecutiveSkill;
