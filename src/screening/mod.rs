//! Adaptive screening engine
//!
//! A finite-state branching questionnaire: a directed graph of weighted
//! multiple-choice questions walked one answer at a time to a terminal
//! category-scored summary, from which a prioritized action plan is derived.
//!
//! Flow: question graph → [`ScreeningState::answer`] transitions →
//! [`summarize_screening`] → [`build_action_plan`]

pub mod engine;
pub mod graph;
pub mod plan;
pub mod types;

pub use engine::{summarize_screening, MODERATE_THRESHOLD};
pub use graph::{question, questions, validate_graph, START_QUESTION};
pub use plan::{build_action_plan, CATEGORY_PRIORITY};
pub use types::{
    ActionPlan, AnswerOption, Category, NextStep, ScreeningAnswer, ScreeningQuestion,
    ScreeningState, ScreeningSummary,
};
