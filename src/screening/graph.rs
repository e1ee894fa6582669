//! Static screening question graph
//!
//! A fixed directed graph of weighted multiple-choice questions. The
//! branching policy is adaptive triage: high-severity answers fast-forward
//! directly to the terminal safety question instead of walking every
//! remaining category, so a response that already indicates elevated risk
//! reaches the safety check as quickly as possible.

use crate::error::EngineError;
use crate::screening::types::{AnswerOption, Category, NextStep, ScreeningQuestion};
use std::collections::HashSet;

/// Designated start node of the graph
pub const START_QUESTION: &str = "sleep_quality";

/// Option id on the safety question that clears the safety flag
pub const SAFETY_CLEAR_OPTION: &str = "no";

static QUESTIONS: [ScreeningQuestion; 7] = [
    ScreeningQuestion {
        id: "sleep_quality",
        prompt: "How has your sleep quality been over the last 7 days?",
        category: Category::Sleep,
        options: &[
            AnswerOption {
                id: "great",
                label: "Consistent and restful",
                score: 0,
                next: NextStep::Question("mood_frequency"),
            },
            AnswerOption {
                id: "mixed",
                label: "Inconsistent but manageable",
                score: 1,
                next: NextStep::Question("mood_frequency"),
            },
            AnswerOption {
                id: "poor",
                label: "Frequent wake-ups or very little sleep",
                score: 2,
                next: NextStep::Question("anhedonia"),
            },
        ],
    },
    ScreeningQuestion {
        id: "mood_frequency",
        prompt: "How often did you feel low, down, or hopeless recently?",
        category: Category::Mood,
        options: &[
            AnswerOption {
                id: "rarely",
                label: "Rarely",
                score: 0,
                next: NextStep::Question("energy"),
            },
            AnswerOption {
                id: "sometimes",
                label: "Several days",
                score: 1,
                next: NextStep::Question("energy"),
            },
            AnswerOption {
                id: "often",
                label: "Most days",
                score: 2,
                next: NextStep::Question("anhedonia"),
            },
        ],
    },
    ScreeningQuestion {
        id: "anhedonia",
        prompt: "How hard was it to feel interest or pleasure in normal activities?",
        category: Category::Mood,
        options: &[
            AnswerOption {
                id: "none",
                label: "No significant change",
                score: 0,
                next: NextStep::Question("energy"),
            },
            AnswerOption {
                id: "some",
                label: "Somewhat difficult",
                score: 1,
                next: NextStep::Question("social_connection"),
            },
            AnswerOption {
                id: "high",
                label: "Very difficult",
                score: 2,
                next: NextStep::Question("safety_signal"),
            },
        ],
    },
    ScreeningQuestion {
        id: "energy",
        prompt: "How would you describe your energy and concentration this week?",
        category: Category::Function,
        options: &[
            AnswerOption {
                id: "good",
                label: "Generally steady",
                score: 0,
                next: NextStep::Question("social_connection"),
            },
            AnswerOption {
                id: "dip",
                label: "Noticeable dips in focus",
                score: 1,
                next: NextStep::Question("social_connection"),
            },
            AnswerOption {
                id: "crash",
                label: "Severe fatigue most days",
                score: 2,
                next: NextStep::Question("safety_signal"),
            },
        ],
    },
    ScreeningQuestion {
        id: "social_connection",
        prompt: "How connected did you feel to people you trust?",
        category: Category::Social,
        options: &[
            AnswerOption {
                id: "connected",
                label: "Connected and supported",
                score: 0,
                next: NextStep::Question("stress_load"),
            },
            AnswerOption {
                id: "neutral",
                label: "Somewhat isolated",
                score: 1,
                next: NextStep::Question("stress_load"),
            },
            AnswerOption {
                id: "isolated",
                label: "Very isolated",
                score: 2,
                next: NextStep::Question("safety_signal"),
            },
        ],
    },
    ScreeningQuestion {
        id: "stress_load",
        prompt: "How intense was your stress load across work/school/home?",
        category: Category::Stress,
        options: &[
            AnswerOption {
                id: "light",
                label: "Low and manageable",
                score: 0,
                next: NextStep::Done,
            },
            AnswerOption {
                id: "moderate",
                label: "Moderate but controllable",
                score: 1,
                next: NextStep::Done,
            },
            AnswerOption {
                id: "high",
                label: "Overwhelming",
                score: 2,
                next: NextStep::Question("safety_signal"),
            },
        ],
    },
    // Always terminal: every option ends the flow
    ScreeningQuestion {
        id: "safety_signal",
        prompt: "Have you had thoughts of harming yourself or feeling unsafe?",
        category: Category::Safety,
        options: &[
            AnswerOption {
                id: "no",
                label: "No",
                score: 0,
                next: NextStep::Done,
            },
            AnswerOption {
                id: "uncertain",
                label: "Unsure / fleeting thoughts",
                score: 2,
                next: NextStep::Done,
            },
            AnswerOption {
                id: "yes",
                label: "Yes, and I need support now",
                score: 4,
                next: NextStep::Done,
            },
        ],
    },
];

/// All questions in the catalog
pub fn questions() -> &'static [ScreeningQuestion] {
    &QUESTIONS
}

/// Look up a question by id
pub fn question(id: &str) -> Option<&'static ScreeningQuestion> {
    QUESTIONS.iter().find(|q| q.id == id)
}

/// Validate the structural invariants of the graph: every non-terminal edge
/// must reference an existing question, and every question must be reachable
/// from the start node.
pub fn validate_graph() -> Result<(), EngineError> {
    if question(START_QUESTION).is_none() {
        return Err(EngineError::UnknownQuestion(START_QUESTION.to_string()));
    }

    for q in &QUESTIONS {
        for option in q.options {
            if let NextStep::Question(next) = option.next {
                if question(next).is_none() {
                    return Err(EngineError::UnknownQuestion(next.to_string()));
                }
            }
        }
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut frontier = vec![START_QUESTION];
    while let Some(id) = frontier.pop() {
        if !visited.insert(id) {
            continue;
        }
        if let Some(q) = question(id) {
            for option in q.options {
                if let NextStep::Question(next) = option.next {
                    frontier.push(next);
                }
            }
        }
    }

    for q in &QUESTIONS {
        if !visited.contains(q.id) {
            return Err(EngineError::UnreachableQuestion(q.id.to_string()));
        }
    }

    Ok(())
}
