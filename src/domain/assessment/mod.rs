//! Assessment domain module.
//!
//! Turns 33 answers into eleven category sums, ranks them, and picks the
//! three lowest (strengths) and three highest (weaknesses).

mod aggregate;
mod analysis;
mod errors;
mod responses;
mod scores;
mod student;

pub use aggregate::Assessment;
pub use analysis::{Analysis, Interpretation, SkillScore, STRENGTH_COUNT, WEAKNESS_COUNT};
pub use errors::AssessmentError;
pub use responses::ResponseSet;
pub use scores::{CategoryScores, MAX_CATEGORY_SCORE, MIN_CATEGORY_SCORE};
pub use student::{StudentInfo, MAX_NAME_LEN};

#[cfg(test)]
pub(crate) use responses::fixtures;
