//! Risk ensemble engine
//!
//! Combines a PHQ-9 severity score and an NLP risk classification into one
//! authoritative risk tier plus the reason for that tier. This is the single
//! point where safety overrides short-circuit everything else.

use crate::types::{DecisionReason, EnsembleDecision, NlpPrediction, RiskTier};

/// Reserved NLP class label that forces the highest risk tier
pub const SUICIDE_CLASS: &str = "suicide";

/// PHQ score at or above which the tier is Critical
pub const SEVERE_THRESHOLD: f64 = 20.0;

/// PHQ score at or above which the tier is at least Moderate
pub const ELEVATED_THRESHOLD: f64 = 10.0;

/// Classify a PHQ score into a risk tier.
///
/// A positive Item 9 (self-harm ideation) is an unconditional safety
/// trigger: it forces Critical regardless of the total score. Otherwise the
/// thresholds are inclusive at the lower bound, so 10 and 20 belong to the
/// higher tier.
pub fn classify_phq_risk(phq_score: f64, item9_positive: bool) -> EnsembleDecision {
    if item9_positive {
        return EnsembleDecision {
            tier: RiskTier::Critical,
            reason: DecisionReason::Item9SafetyOverride,
        };
    }

    if phq_score >= SEVERE_THRESHOLD {
        EnsembleDecision {
            tier: RiskTier::Critical,
            reason: DecisionReason::SevereScore,
        }
    } else if phq_score >= ELEVATED_THRESHOLD {
        EnsembleDecision {
            tier: RiskTier::Moderate,
            reason: DecisionReason::ElevatingScore,
        }
    } else {
        EnsembleDecision {
            tier: RiskTier::Low,
            reason: DecisionReason::LowScore,
        }
    }
}

/// Merge the PHQ classification with the NLP signal into a final decision.
///
/// Priority order:
/// 1. NLP suicide-language detection dominates everything, including the
///    Item 9 override.
/// 2. Passive signals (`risk_tier == 1`) can elevate a stable base tier to
///    Moderate, but never override a higher base tier.
/// 3. Otherwise the PHQ-only classification stands.
///
/// A missing prediction is treated as "no additional signal", never an
/// error. The result is monotone: merging can only raise the tier relative
/// to the PHQ-only base, never lower it.
pub fn combine_decision(
    phq_score: f64,
    nlp: Option<&NlpPrediction>,
    item9_positive: bool,
) -> EnsembleDecision {
    let base = classify_phq_risk(phq_score, item9_positive);

    if let Some(prediction) = nlp {
        if prediction.predicted_class == SUICIDE_CLASS {
            return EnsembleDecision {
                tier: RiskTier::Critical,
                reason: DecisionReason::NlpSuicideDetection,
            };
        }

        if base.tier == RiskTier::Low && prediction.risk_tier == Some(RiskTier::Moderate) {
            return EnsembleDecision {
                tier: RiskTier::Moderate,
                reason: DecisionReason::PassiveSignalMismatch,
            };
        }
    }

    base
}
