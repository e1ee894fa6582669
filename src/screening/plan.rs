//! Action plan builder
//!
//! Turns a screening summary into a prioritized, tier-specific action plan.
//! The tier driving the critical branch is the externally merged effective
//! tier, passed in explicitly: the screening summary alone never exceeds
//! Moderate.

use crate::screening::types::{ActionPlan, Category, ScreeningSummary};
use crate::types::RiskTier;

/// Tie-break priority for the dominant focus category. Safety concerns win
/// over everything; mood over general wellness dimensions.
pub const CATEGORY_PRIORITY: [Category; 6] = [
    Category::Safety,
    Category::Mood,
    Category::Sleep,
    Category::Stress,
    Category::Social,
    Category::Function,
];

static CRISIS_PROTOCOL_ACTION: &str =
    "Start crisis-safe protocol and do not stay alone if unsafe.";

fn focus_actions(category: Category) -> &'static [&'static str; 3] {
    match category {
        Category::Sleep => &[
            "Set a fixed sleep window for the next 3 nights (+/- 30 minutes).",
            "Stop phone scrolling 45 minutes before bedtime.",
            "Use a 6-minute wind-down routine: breathing, hydration, and lights down.",
        ],
        Category::Mood => &[
            "Book two 15-minute mood breaks in your calendar tomorrow.",
            "Write one sentence naming the toughest feeling and one needed support.",
            "Do one low-effort activity that usually gives mild relief.",
        ],
        Category::Stress => &[
            "Run a 20-minute focus sprint, then take a 5-minute walk break.",
            "Move one non-essential task from today to later this week.",
            "Send a short message requesting help on one current stress point.",
        ],
        Category::Social => &[
            "Send a check-in to one trusted person now.",
            "Schedule one in-person or voice connection in the next 48 hours.",
            "Use the care circle feature if isolation continues tomorrow.",
        ],
        Category::Function => &[
            "Start the day with one easy task to build momentum.",
            "Use a 25/5 focus block for your highest-value work.",
            "Avoid multitasking in the first 90 minutes of tomorrow.",
        ],
        Category::Safety => &[
            "Open immediate support resources and keep them pinned.",
            "Notify trusted contact with a predefined message.",
            "Escalate to crisis support now if you feel unsafe.",
        ],
    }
}

/// Category with the highest aggregate score; ties broken by
/// [`CATEGORY_PRIORITY`]. Defaults to sleep when no answers were scored.
fn top_focus(summary: &ScreeningSummary) -> Category {
    let mut best: Option<(Category, u32)> = None;

    for category in CATEGORY_PRIORITY {
        if let Some(&score) = summary.category_scores.get(&category) {
            match best {
                Some((_, best_score)) if best_score >= score => {}
                _ => best = Some((category, score)),
            }
        }
    }

    best.map(|(category, _)| category).unwrap_or(Category::Sleep)
}

/// Build an action plan from a screening summary and the effective tier
/// (`max(ensemble tier, screening tier)` wherever both exist).
pub fn build_action_plan(summary: &ScreeningSummary, effective_tier: RiskTier) -> ActionPlan {
    let focus = top_focus(summary);
    let base_actions = focus_actions(focus);

    match effective_tier {
        RiskTier::Critical => {
            let mut actions = vec![CRISIS_PROTOCOL_ACTION.to_string()];
            actions.extend(
                focus_actions(Category::Safety)
                    .iter()
                    .map(|action| action.to_string()),
            );
            actions.push(base_actions[0].to_string());

            ActionPlan {
                title: "Immediate Stabilization Plan".to_string(),
                window: "Next 24 hours".to_string(),
                actions,
            }
        }
        RiskTier::Moderate => {
            let mut actions: Vec<String> =
                base_actions.iter().map(|action| action.to_string()).collect();
            actions.push("Re-screen in 48 hours to confirm trend direction.".to_string());

            ActionPlan {
                title: "Early Intervention Plan".to_string(),
                window: "Next 72 hours".to_string(),
                actions,
            }
        }
        RiskTier::Low => {
            let mut actions: Vec<String> =
                base_actions.iter().map(|action| action.to_string()).collect();
            actions.push("Keep daily check-ins to sustain your current baseline.".to_string());

            ActionPlan {
                title: "Prevention Momentum Plan".to_string(),
                window: "Next 7 days".to_string(),
                actions,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::engine::summarize_screening;
    use crate::screening::types::ScreeningState;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeMap;

    fn summary_with(scores: &[(Category, u32)], tier: RiskTier) -> ScreeningSummary {
        let mut category_scores = BTreeMap::new();
        let mut total = 0;
        for &(category, score) in scores {
            category_scores.insert(category, score);
            total += score;
        }
        ScreeningSummary {
            total_score: total,
            category_scores,
            safety_flag: false,
            tier,
            label: crate::catalog::tier_profile(tier).label.to_string(),
        }
    }

    #[test]
    fn test_prevention_plan_for_low_tier() {
        let summary = summary_with(&[(Category::Sleep, 1)], RiskTier::Low);
        let plan = build_action_plan(&summary, RiskTier::Low);

        assert_eq!(plan.title, "Prevention Momentum Plan");
        assert_eq!(plan.window, "Next 7 days");
        assert_eq!(plan.actions.len(), 4);
        assert_eq!(
            plan.actions[3],
            "Keep daily check-ins to sustain your current baseline."
        );
    }

    #[test]
    fn test_early_intervention_plan_for_moderate_tier() {
        let summary = summary_with(&[(Category::Stress, 3)], RiskTier::Moderate);
        let plan = build_action_plan(&summary, RiskTier::Moderate);

        assert_eq!(plan.title, "Early Intervention Plan");
        assert_eq!(plan.window, "Next 72 hours");
        assert_eq!(
            plan.actions[0],
            "Run a 20-minute focus sprint, then take a 5-minute walk break."
        );
        assert_eq!(
            plan.actions[3],
            "Re-screen in 48 hours to confirm trend direction."
        );
    }

    #[test]
    fn test_stabilization_plan_for_critical_effective_tier() {
        // Screening alone caps at Moderate; Critical arrives via the merge
        let summary = summary_with(&[(Category::Mood, 4)], RiskTier::Moderate);
        let plan = build_action_plan(&summary, RiskTier::Critical);

        assert_eq!(plan.title, "Immediate Stabilization Plan");
        assert_eq!(plan.window, "Next 24 hours");
        assert_eq!(plan.actions.len(), 5);
        assert_eq!(
            plan.actions[0],
            "Start crisis-safe protocol and do not stay alone if unsafe."
        );
        // Safety catalog in the middle, one top-focus action appended
        assert_eq!(
            plan.actions[4],
            "Book two 15-minute mood breaks in your calendar tomorrow."
        );
    }

    #[test]
    fn test_top_focus_picks_highest_score() {
        let summary = summary_with(
            &[(Category::Sleep, 1), (Category::Social, 3)],
            RiskTier::Low,
        );
        let plan = build_action_plan(&summary, RiskTier::Low);
        assert_eq!(plan.actions[0], "Send a check-in to one trusted person now.");
    }

    #[test]
    fn test_tie_broken_by_category_priority() {
        let summary = summary_with(
            &[(Category::Function, 2), (Category::Mood, 2)],
            RiskTier::Low,
        );
        let plan = build_action_plan(&summary, RiskTier::Low);
        assert_eq!(
            plan.actions[0],
            "Book two 15-minute mood breaks in your calendar tomorrow."
        );
    }

    #[test]
    fn test_empty_summary_defaults_to_sleep_focus() {
        let summary = summarize_screening(&[]);
        let plan = build_action_plan(&summary, RiskTier::Low);
        assert_eq!(
            plan.actions[0],
            "Set a fixed sleep window for the next 3 nights (+/- 30 minutes)."
        );
    }

    #[test]
    fn test_plan_from_full_walkthrough() {
        let state = ScreeningState::initial()
            .answer("poor") // sleep 2 -> anhedonia
            .answer("some") // mood 1 -> social_connection
            .answer("isolated") // social 2 -> safety_signal
            .answer("no"); // safety 0 -> done
        assert!(state.completed);

        let summary = summarize_screening(&state.answers);
        assert_eq!(summary.tier, RiskTier::Moderate);

        let plan = build_action_plan(&summary, summary.tier);
        assert_eq!(plan.title, "Early Intervention Plan");
        // sleep and social tie at 2; sleep wins by priority
        assert_eq!(
            plan.actions[0],
            "Set a fixed sleep window for the next 3 nights (+/- 30 minutes)."
        );
    }

    #[test]
    fn test_idempotence() {
        let summary = summary_with(&[(Category::Stress, 2)], RiskTier::Moderate);
        let first = build_action_plan(&summary, RiskTier::Moderate);
        let second = build_action_plan(&summary, RiskTier::Moderate);
        assert_eq!(first, second);
    }
}
