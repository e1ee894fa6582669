//! Screening state machine
//!
//! Table-driven transitions over the static question graph, plus the summary
//! computation over the accumulated answer history. The state is an
//! immutable value: each transition returns a new state, and invalid input
//! is a silent no-op (the originating UI only ever submits valid option
//! ids).

use crate::catalog;
use crate::screening::graph;
use crate::screening::types::{
    Category, NextStep, ScreeningAnswer, ScreeningState, ScreeningSummary,
};
use crate::types::RiskTier;
use std::collections::BTreeMap;

/// Total score at or above which the screening tier is Moderate
pub const MODERATE_THRESHOLD: u32 = 4;

impl ScreeningState {
    /// Fresh state pointing at the start of the question graph
    pub fn initial() -> Self {
        Self {
            current_question_id: Some(graph::START_QUESTION.to_string()),
            answers: Vec::new(),
            completed: false,
        }
    }

    /// Apply one answer and return the successor state.
    ///
    /// No-op (returns a clone of `self`) when the screening is already
    /// completed or `option_id` does not match any option of the current
    /// question. Otherwise appends an immutable answer record and either
    /// advances to the option's next question or completes the screening.
    pub fn answer(&self, option_id: &str) -> ScreeningState {
        if self.completed {
            return self.clone();
        }

        let Some(current_id) = self.current_question_id.as_deref() else {
            return self.clone();
        };
        let Some(question) = graph::question(current_id) else {
            return self.clone();
        };
        let Some(option) = question.options.iter().find(|o| o.id == option_id) else {
            return self.clone();
        };

        let mut answers = self.answers.clone();
        answers.push(ScreeningAnswer {
            question_id: question.id.to_string(),
            prompt: question.prompt.to_string(),
            category: question.category,
            option_id: option.id.to_string(),
            option_label: option.label.to_string(),
            score: option.score,
        });

        match option.next {
            NextStep::Done => ScreeningState {
                current_question_id: None,
                answers,
                completed: true,
            },
            NextStep::Question(next) => ScreeningState {
                current_question_id: Some(next.to_string()),
                answers,
                completed: false,
            },
        }
    }
}

/// Summarize an answer history into a category-scored result.
///
/// The summary tier only ever reaches Moderate; the Critical action path is
/// driven by the externally merged effective tier (see
/// [`crate::pipeline::effective_tier`]).
pub fn summarize_screening(answers: &[ScreeningAnswer]) -> ScreeningSummary {
    let mut total_score = 0;
    let mut category_scores: BTreeMap<Category, u32> = BTreeMap::new();
    let mut safety_flag = false;

    for answer in answers {
        total_score += answer.score;
        *category_scores.entry(answer.category).or_insert(0) += answer.score;
        if answer.category == Category::Safety && answer.option_id != graph::SAFETY_CLEAR_OPTION {
            safety_flag = true;
        }
    }

    let tier = if total_score >= MODERATE_THRESHOLD {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    };

    ScreeningSummary {
        total_score,
        category_scores,
        safety_flag,
        tier,
        label: catalog::tier_profile(tier).label.to_string(),
    }
}
