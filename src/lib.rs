//! Executive Skills - Student self-assessment service
//!
//! Scores a fixed 33-item questionnaire into eleven executive skill
//! categories, ranks strengths and areas for growth, stores each submission
//! and forwards a report by email and to a spreadsheet webhook.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
