//! Assessment orchestration
//!
//! This module provides the public API for MindTrace Core: it runs the risk
//! ensemble engine and its builders over whatever upstream signals are
//! currently available and wraps the result in a versioned, provenance-
//! stamped assessment payload.

use crate::ensemble::combine_decision;
use crate::error::EngineError;
use crate::explain::build_explainability_summary;
use crate::phq::PhqInput;
use crate::plan::build_intervention_plan;
use crate::types::{EnsembleDecision, FeatureEffect, InterventionPlan, NlpPrediction, RiskTier};
use crate::{CORE_VERSION, PRODUCER_NAME};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Current assessment payload version
pub const ASSESSMENT_VERSION: &str = "1.0.0";

/// Producer metadata stamped on every assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Complete risk assessment: the ensemble decision plus everything derived
/// from it, ready for rendering or downstream dispatch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub assessment_version: String,
    pub producer: AssessmentProducer,
    pub computed_at_utc: String,
    pub decision: EnsembleDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<InterventionPlan>,
    pub explainability: Vec<FeatureEffect>,
}

/// Effective tier wherever an ensemble decision and a screening summary
/// coexist: the maximum of both, never lower than either source.
pub fn effective_tier(ensemble: RiskTier, screening: RiskTier) -> RiskTier {
    ensemble.max(screening)
}

/// Assessment engine carrying a stable instance id for provenance.
///
/// All computation is pure and re-entrant; the engine holds no signal state.
pub struct RiskEngine {
    instance_id: String,
}

impl Default for RiskEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskEngine {
    /// Create an engine with a unique instance ID
    pub fn new() -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
        }
    }

    /// Create an engine with a specific instance ID
    pub fn with_instance_id(instance_id: String) -> Self {
        Self { instance_id }
    }

    /// Run the full ensemble path over the available upstream signals.
    ///
    /// Accepts whatever is currently available, including nothing at all:
    /// a missing PHQ input coerces to a score of 0 and a missing NLP
    /// prediction is treated as an absent signal, so this never fails.
    pub fn assess(
        &self,
        phq: Option<&PhqInput>,
        nlp: Option<&NlpPrediction>,
        item9_positive: bool,
    ) -> RiskAssessment {
        let phq_score = phq.map(PhqInput::normalize).unwrap_or(0.0);
        let decision = combine_decision(phq_score, nlp, item9_positive);

        RiskAssessment {
            assessment_version: ASSESSMENT_VERSION.to_string(),
            producer: AssessmentProducer {
                name: PRODUCER_NAME.to_string(),
                version: CORE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            decision,
            plan: build_intervention_plan(Some(&decision), nlp, phq),
            explainability: build_explainability_summary(nlp),
        }
    }

    /// Assess and serialize to a JSON string
    pub fn assess_to_json(
        &self,
        phq: Option<&PhqInput>,
        nlp: Option<&NlpPrediction>,
        item9_positive: bool,
    ) -> Result<String, EngineError> {
        let assessment = self.assess(phq, nlp, item9_positive);
        serde_json::to_string_pretty(&assessment).map_err(EngineError::JsonError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DecisionReason;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_effective_tier_is_monotonic_union() {
        assert_eq!(
            effective_tier(RiskTier::Low, RiskTier::Moderate),
            RiskTier::Moderate
        );
        assert_eq!(
            effective_tier(RiskTier::Critical, RiskTier::Low),
            RiskTier::Critical
        );
        assert_eq!(effective_tier(RiskTier::Low, RiskTier::Low), RiskTier::Low);
    }

    #[test]
    fn test_assess_severe_score_without_nlp() {
        let engine = RiskEngine::with_instance_id("test-instance".to_string());
        let assessment = engine.assess(Some(&PhqInput::Score(22.0)), None, false);

        assert_eq!(assessment.decision.tier, RiskTier::Critical);
        assert_eq!(assessment.decision.reason, DecisionReason::SevereScore);
        assert!(assessment.explainability.is_empty());

        let plan = assessment.plan.unwrap();
        assert_eq!(plan.interventions.len(), 3);
        assert_eq!(
            plan.interventions[0],
            "Immediately surface emergency resources and hotlines."
        );
    }

    #[test]
    fn test_assess_elevating_score_with_neutral_nlp() {
        let nlp = NlpPrediction {
            predicted_class: "neutral".to_string(),
            confidence: 0.7,
            risk_tier: Some(RiskTier::Low),
            top_features: Vec::new(),
        };

        let engine = RiskEngine::new();
        let assessment = engine.assess(Some(&PhqInput::Score(12.0)), Some(&nlp), false);

        assert_eq!(assessment.decision.tier, RiskTier::Moderate);
        assert_eq!(assessment.decision.reason, DecisionReason::ElevatingScore);
    }

    #[test]
    fn test_assess_stress_mismatch_elevates_stable_score() {
        let nlp = NlpPrediction {
            predicted_class: "stress".to_string(),
            confidence: 0.6,
            risk_tier: Some(RiskTier::Moderate),
            top_features: Vec::new(),
        };

        let engine = RiskEngine::new();
        let assessment = engine.assess(Some(&PhqInput::Score(4.0)), Some(&nlp), false);

        assert_eq!(assessment.decision.tier, RiskTier::Moderate);
        assert_eq!(
            assessment.decision.reason,
            DecisionReason::PassiveSignalMismatch
        );
        // Synthesized explainability, boosted for tier 1
        assert_eq!(assessment.explainability.len(), 5);
        assert_eq!(assessment.explainability[0].effect, 0.48);
    }

    #[test]
    fn test_assess_with_no_inputs_degrades_to_stable() {
        let engine = RiskEngine::new();
        let assessment = engine.assess(None, None, false);

        assert_eq!(assessment.decision.tier, RiskTier::Low);
        assert_eq!(assessment.decision.reason, DecisionReason::LowScore);
        let plan = assessment.plan.unwrap();
        assert_eq!(plan.phq_severity, "Not available");
    }

    #[test]
    fn test_assessment_payload_shape() {
        let engine = RiskEngine::with_instance_id("fixed-id".to_string());
        let json = engine
            .assess_to_json(Some(&PhqInput::Score(22.0)), None, false)
            .unwrap();
        let payload: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(payload["assessment_version"], ASSESSMENT_VERSION);
        assert_eq!(payload["producer"]["name"], "mindtrace-core");
        assert_eq!(payload["producer"]["instance_id"], "fixed-id");
        assert_eq!(payload["decision"]["tier"], 2);
        assert_eq!(payload["decision"]["reason"], "Critical: Severe Score");
        assert_eq!(payload["plan"]["label"], "Critical");
    }
}
