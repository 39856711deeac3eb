//! The eleven executive skill categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the eleven behavioral dimensions the questionnaire measures.
///
/// Declaration order is catalog order: the k-th skill is fed by questions
/// `3k+1..=3k+3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutiveSkill {
    ResponseInhibition,
    WorkingMemory,
    EmotionalControl,
    Flexibility,
    SustainedAttention,
    TaskInitiation,
    PlanningPrioritizing,
    Organization,
    TimeManagement,
    GoalDirectedPersistence,
    Metacognition,
}

impl ExecutiveSkill {
    /// Number of skill categories.
    pub const COUNT: usize = 11;

    /// Questions feeding each skill.
    pub const QUESTIONS_PER_SKILL: u8 = 3;

    /// All skills in catalog order.
    pub const ALL: [ExecutiveSkill; Self::COUNT] = [
        ExecutiveSkill::ResponseInhibition,
        ExecutiveSkill::WorkingMemory,
        ExecutiveSkill::EmotionalControl,
        ExecutiveSkill::Flexibility,
        ExecutiveSkill::SustainedAttention,
        ExecutiveSkill::TaskInitiation,
        ExecutiveSkill::PlanningPrioritizing,
        ExecutiveSkill::Organization,
        ExecutiveSkill::TimeManagement,
        ExecutiveSkill::GoalDirectedPersistence,
        ExecutiveSkill::Metacognition,
    ];

    /// Position in catalog order (0-based).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Stable snake_case key, used in storage and JSON.
    pub fn key(&self) -> &'static str {
        match self {
            ExecutiveSkill::ResponseInhibition => "response_inhibition",
            ExecutiveSkill::WorkingMemory => "working_memory",
            ExecutiveSkill::EmotionalControl => "emotional_control",
            ExecutiveSkill::Flexibility => "flexibility",
            ExecutiveSkill::SustainedAttention => "sustained_attention",
            ExecutiveSkill::TaskInitiation => "task_initiation",
            ExecutiveSkill::PlanningPrioritizing => "planning_prioritizing",
            ExecutiveSkill::Organization => "organization",
            ExecutiveSkill::TimeManagement => "time_management",
            ExecutiveSkill::GoalDirectedPersistence => "goal_directed_persistence",
            ExecutiveSkill::Metacognition => "metacognition",
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ExecutiveSkill::ResponseInhibition => "Response Inhibition",
            ExecutiveSkill::WorkingMemory => "Working Memory",
            ExecutiveSkill::EmotionalControl => "Emotional Control",
            ExecutiveSkill::Flexibility => "Flexibility",
            ExecutiveSkill::SustainedAttention => "Sustained Attention",
            ExecutiveSkill::TaskInitiation => "Task Initiation",
            ExecutiveSkill::PlanningPrioritizing => "Planning/Prioritizing",
            ExecutiveSkill::Organization => "Organization",
            ExecutiveSkill::TimeManagement => "Time Management",
            ExecutiveSkill::GoalDirectedPersistence => "Goal-Directed Persistence",
            ExecutiveSkill::Metacognition => "Metacognition",
        }
    }

    /// camelCase key used by the spreadsheet webhook.
    pub fn camel_key(&self) -> &'static str {
        match self {
            ExecutiveSkill::ResponseInhibition => "responseInhibition",
            ExecutiveSkill::WorkingMemory => "workingMemory",
            ExecutiveSkill::EmotionalControl => "emotionalControl",
            ExecutiveSkill::Flexibility => "flexibility",
            ExecutiveSkill::SustainedAttention => "sustainedAttention",
            ExecutiveSkill::TaskInitiation => "taskInitiation",
            ExecutiveSkill::PlanningPrioritizing => "planningPrioritizing",
            ExecutiveSkill::Organization => "organization",
            ExecutiveSkill::TimeManagement => "timeManagement",
            ExecutiveSkill::GoalDirectedPersistence => "goalDirectedPersistence",
            ExecutiveSkill::Metacognition => "metacognition",
        }
    }

    /// Ids of the three questions scored into this skill.
    pub fn question_ids(&self) -> [u8; 3] {
        let first = self.index() as u8 * Self::QUESTIONS_PER_SKILL + 1;
        [first, first + 1, first + 2]
    }
}

impl fmt::Display for ExecutiveSkill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExecutiveSkill {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExecutiveSkill::ALL
            .into_iter()
            .find(|skill| skill.key() == s)
            .ok_or_else(|| ValidationError::invalid_format("skill", format!("unknown skill '{}'", s)))
    }
}
