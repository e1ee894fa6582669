//! Intervention plan builder
//!
//! Derives a tier-specific intervention plan from an ensemble decision. The
//! builder only describes what should happen; notification dispatch is the
//! surrounding application's responsibility, gated on user consent it owns.

use crate::catalog;
use crate::phq::PhqInput;
use crate::types::{EnsembleDecision, InterventionPlan, NlpPrediction};

/// Build an intervention plan for a decision.
///
/// Returns `None` when no decision exists yet (upstream scoring still in
/// flight). Missing NLP or PHQ inputs degrade the passthrough fields to
/// their documented defaults instead of erroring.
pub fn build_intervention_plan(
    decision: Option<&EnsembleDecision>,
    nlp: Option<&NlpPrediction>,
    phq: Option<&PhqInput>,
) -> Option<InterventionPlan> {
    let decision = decision?;
    let profile = catalog::tier_profile(decision.tier);

    Some(InterventionPlan {
        tier: decision.tier,
        label: profile.label.to_string(),
        color: profile.color.to_string(),
        summary: profile.summary.to_string(),
        reason: decision.reason,
        interventions: catalog::interventions(decision.tier)
            .iter()
            .map(|action| action.to_string())
            .collect(),
        predicted_class: nlp
            .map(|prediction| prediction.predicted_class.clone())
            .filter(|class| !class.is_empty())
            .unwrap_or_else(|| "unknown".to_string()),
        confidence: nlp.map(|prediction| prediction.confidence).unwrap_or(0.0),
        phq_severity: phq
            .map(PhqInput::severity_label)
            .unwrap_or_else(|| "Not available".to_string()),
    })
}
