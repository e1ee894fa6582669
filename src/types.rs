//! Core types for the MindTrace decision engines
//!
//! This module defines the data structures that flow between the risk
//! ensemble engine and its builders: upstream model predictions, the merged
//! ensemble decision, and the derived plan/explainability records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal risk tier driving escalation behavior.
///
/// Higher tier always dominates when two sources are merged (see
/// [`crate::pipeline::effective_tier`]). Serialized as the integer 0/1/2 for
/// wire compatibility with consuming UIs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum RiskTier {
    /// Stable signals; keep reinforcing healthy routines
    Low = 0,
    /// Rising strain; early intervention recommended
    Moderate = 1,
    /// High-risk pattern; escalate immediately
    Critical = 2,
}

impl From<RiskTier> for u8 {
    fn from(tier: RiskTier) -> u8 {
        tier as u8
    }
}

impl TryFrom<u8> for RiskTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RiskTier::Low),
            1 => Ok(RiskTier::Moderate),
            2 => Ok(RiskTier::Critical),
            other => Err(format!("invalid risk tier: {other}")),
        }
    }
}

impl fmt::Display for RiskTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::catalog::tier_profile(*self).label)
    }
}

/// Machine-readable justification attached to an ensemble decision.
///
/// Serialized as the fixed audit string each variant represents, so
/// downstream consumers can display or log it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecisionReason {
    #[serde(rename = "Critical: Item 9 Safety Override")]
    Item9SafetyOverride,
    #[serde(rename = "Critical: Severe Score")]
    SevereScore,
    #[serde(rename = "Moderate: Elevating Score")]
    ElevatingScore,
    #[serde(rename = "Stable: Low Score")]
    LowScore,
    #[serde(rename = "Critical: NLP Suicide Detection")]
    NlpSuicideDetection,
    #[serde(rename = "Moderate: Passive Signals detect stress mismatch")]
    PassiveSignalMismatch,
}

impl DecisionReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecisionReason::Item9SafetyOverride => "Critical: Item 9 Safety Override",
            DecisionReason::SevereScore => "Critical: Severe Score",
            DecisionReason::ElevatingScore => "Moderate: Elevating Score",
            DecisionReason::LowScore => "Stable: Low Score",
            DecisionReason::NlpSuicideDetection => "Critical: NLP Suicide Detection",
            DecisionReason::PassiveSignalMismatch => {
                "Moderate: Passive Signals detect stress mismatch"
            }
        }
    }
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single feature attribution supplied by the NLP model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopFeature {
    /// Feature identifier (empty when the model omits it)
    #[serde(default)]
    pub feature: String,
    /// Relative impact score; rank-based fallback applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact: Option<f64>,
}

/// Classification produced by the upstream NLP risk model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NlpPrediction {
    /// Predicted class label; the reserved value `"suicide"` triggers the
    /// highest-priority safety override
    pub predicted_class: String,
    /// Model confidence (0-1)
    #[serde(default)]
    pub confidence: f64,
    /// Secondary passive-signal risk read, if the model provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_tier: Option<RiskTier>,
    /// Ranked feature attributions, if the model provides them
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub top_features: Vec<TopFeature>,
}

/// Merged output of the PHQ classifier and the NLP classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnsembleDecision {
    pub tier: RiskTier,
    pub reason: DecisionReason,
}

/// One entry of an explainability summary, ranked by effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureEffect {
    /// Human-readable signal name
    pub name: String,
    /// Relative impact score; not guaranteed normalized
    pub effect: f64,
}

/// Tier-specific intervention plan derived from an ensemble decision.
///
/// Describes what should happen; it never dispatches notifications itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterventionPlan {
    pub tier: RiskTier,
    pub label: String,
    pub color: String,
    pub summary: String,
    pub reason: DecisionReason,
    /// Fixed tier-indexed catalog of exactly 3 recommended actions
    pub interventions: Vec<String>,
    pub predicted_class: String,
    pub confidence: f64,
    pub phq_severity: String,
}
