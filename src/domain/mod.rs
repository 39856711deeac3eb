//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `questionnaire` - The fixed 33-item question catalog and its eleven skills
//! - `assessment` - Scoring, ranking and the submitted assessment aggregate

pub mod assessment;
pub mod foundation;
pub mod questionnaire;
