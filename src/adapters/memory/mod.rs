//! In-memory adapters for development and tests.

mod assessment_repository;

pub use assessment_repository::InMemoryAssessmentRepository;
