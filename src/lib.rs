//! MindTrace Core - On-device decision core for a mental-health companion
//!
//! Two independent, deterministic decision engines and the builders derived
//! from their outputs:
//!
//! - **Risk Ensemble Engine**: merges a PHQ-9 severity score and an NLP risk
//!   classification into one authoritative risk tier, with documented safety
//!   overrides, and derives a tier-specific intervention plan and an
//!   explainability summary.
//! - **Adaptive Screening Engine**: a branching questionnaire state machine
//!   producing a category-scored summary, a safety flag, and a tier, from
//!   which a prioritized action plan is derived.
//!
//! All operations are synchronous pure functions over immutable value
//! objects; missing or partial upstream signals degrade to conservative
//! defaults rather than erroring.

pub mod catalog;
pub mod ensemble;
pub mod error;
pub mod explain;
pub mod phq;
pub mod pipeline;
pub mod plan;
pub mod screening;
pub mod types;

pub use ensemble::{classify_phq_risk, combine_decision, SUICIDE_CLASS};
pub use error::EngineError;
pub use explain::build_explainability_summary;
pub use phq::{PhqInput, PhqPayload};
pub use pipeline::{effective_tier, RiskAssessment, RiskEngine};
pub use plan::build_intervention_plan;

// Screening exports
pub use screening::{
    build_action_plan, summarize_screening, ActionPlan, ScreeningState, ScreeningSummary,
};

pub use types::{
    DecisionReason, EnsembleDecision, FeatureEffect, InterventionPlan, NlpPrediction, RiskTier,
    TopFeature,
};

/// Core version embedded in all assessment payloads
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for assessment payloads
pub const PRODUCER_NAME: &str = "mindtrace-core";
