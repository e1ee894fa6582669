//! Types for the adaptive screening engine

use crate::types::RiskTier;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wellness dimension a screening question probes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sleep,
    Mood,
    Stress,
    Social,
    Function,
    Safety,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Sleep => "sleep",
            Category::Mood => "mood",
            Category::Stress => "stress",
            Category::Social => "social",
            Category::Function => "function",
            Category::Safety => "safety",
        }
    }
}

/// Edge out of an answer option: another question, or the terminal state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextStep {
    Question(&'static str),
    Done,
}

/// One selectable option of a screening question
#[derive(Debug, Clone, Copy)]
pub struct AnswerOption {
    pub id: &'static str,
    pub label: &'static str,
    pub score: u32,
    pub next: NextStep,
}

/// Node in the screening question graph
#[derive(Debug, Clone, Copy)]
pub struct ScreeningQuestion {
    pub id: &'static str,
    pub prompt: &'static str,
    pub category: Category,
    pub options: &'static [AnswerOption],
}

/// Immutable record of one answered question; never mutated after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningAnswer {
    pub question_id: String,
    pub prompt: String,
    pub category: Category,
    pub option_id: String,
    pub option_label: String,
    pub score: u32,
}

/// Screening session state, replaced wholesale on each transition.
///
/// Owned by a single caller; transitions happen only through
/// [`ScreeningState::answer`]. Once `completed` is true the state is
/// terminal and further answers are no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningState {
    pub current_question_id: Option<String>,
    pub answers: Vec<ScreeningAnswer>,
    pub completed: bool,
}

/// Category-scored summary of a completed (or in-progress) screening
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningSummary {
    pub total_score: u32,
    pub category_scores: BTreeMap<Category, u32>,
    /// True iff any safety-category answer selected something other than "no"
    pub safety_flag: bool,
    pub tier: RiskTier,
    pub label: String,
}

/// Prioritized, tier-specific action plan derived from a screening summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionPlan {
    pub title: String,
    pub window: String,
    pub actions: Vec<String>,
}
