//! Static tier metadata and resource tables
//!
//! Leaf constants consumed by the engines and builders: per-tier display
//! metadata, the tier-indexed intervention catalog, the passive-signal
//! catalog used for synthesized explainability, and crisis resources.
//! All tables are static and never mutated.

use crate::types::RiskTier;
use serde::Serialize;

/// Display metadata attached to a risk tier
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TierProfile {
    pub label: &'static str,
    /// Color token understood by consuming UIs
    pub color: &'static str,
    pub summary: &'static str,
}

static TIER_PROFILES: [TierProfile; 3] = [
    TierProfile {
        label: "Low",
        color: "var(--color-success)",
        summary: "Stable signals. Keep reinforcing healthy routines.",
    },
    TierProfile {
        label: "Moderate",
        color: "var(--color-warning)",
        summary: "Rising strain detected. Early intervention is recommended.",
    },
    TierProfile {
        label: "Critical",
        color: "var(--color-danger)",
        summary: "High-risk pattern detected. Escalate immediately.",
    },
];

/// Look up display metadata for a tier
pub fn tier_profile(tier: RiskTier) -> &'static TierProfile {
    &TIER_PROFILES[tier as usize]
}

static INTERVENTIONS: [[&str; 3]; 3] = [
    // Tier 0: reinforcement habits
    [
        "Celebrate one positive routine you maintained this week.",
        "Keep sleep and wake windows within 30 minutes.",
        "Schedule one social check-in today.",
    ],
    // Tier 1: early-intervention actions
    [
        "Take a 10-minute walk or sunlight break within the next hour.",
        "Reduce late-night screen time tonight by 30 minutes.",
        "Prompt a trusted contact to check in within 24 hours.",
    ],
    // Tier 2: crisis actions
    [
        "Immediately surface emergency resources and hotlines.",
        "Notify designated trusted contact(s) with user consent.",
        "Recommend professional intervention and same-day support.",
    ],
];

/// Tier-indexed catalog of exactly 3 recommended actions
pub fn interventions(tier: RiskTier) -> &'static [&'static str; 3] {
    &INTERVENTIONS[tier as usize]
}

/// Passive wearable signal used to synthesize an explainability summary
/// when the NLP model supplies no feature attributions
#[derive(Debug, Clone, Copy)]
pub struct PassiveSignal {
    /// Raw feature key in the upstream model's vocabulary
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Base effect size at tier 0
    pub base_effect: f64,
    /// Linear effect boost applied per tier step
    pub tier_boost: f64,
}

static PASSIVE_SIGNALS: [PassiveSignal; 5] = [
    PassiveSignal {
        key: "sleep.offset.wd.sd",
        label: "Sleep timing variability",
        base_effect: 0.42,
        tier_boost: 0.06,
    },
    PassiveSignal {
        key: "NHR.0204.cv",
        label: "Nocturnal HR variability",
        base_effect: 0.36,
        tier_boost: 0.05,
    },
    PassiveSignal {
        key: "AC.st.30m.wd",
        label: "Daily activity consistency",
        base_effect: 0.30,
        tier_boost: 0.05,
    },
    PassiveSignal {
        key: "ICV.hr.wd",
        label: "Heart-rate rhythm instability",
        base_effect: 0.25,
        tier_boost: 0.04,
    },
    PassiveSignal {
        key: "peaks.st.wd",
        label: "Activity peak irregularity",
        base_effect: 0.20,
        tier_boost: 0.03,
    },
];

/// Fixed 5-signal catalog, ranked by base effect descending
pub fn passive_signals() -> &'static [PassiveSignal; 5] {
    &PASSIVE_SIGNALS
}

/// Crisis support resource surfaced to tier-2 consumers
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CrisisResource {
    pub label: &'static str,
    pub value: &'static str,
    pub detail: &'static str,
    pub href: &'static str,
}

/// Static crisis-resource table for critical-tier escalation surfaces
pub static CRISIS_RESOURCES: [CrisisResource; 3] = [
    CrisisResource {
        label: "US 988 Lifeline",
        value: "Call or text 988",
        detail: "24/7 confidential support",
        href: "https://988lifeline.org/",
    },
    CrisisResource {
        label: "Emergency",
        value: "Call 911",
        detail: "Immediate danger or medical emergency",
        href: "tel:911",
    },
    CrisisResource {
        label: "Find Local Care",
        value: "SAMHSA treatment locator",
        detail: "Mental health and substance-use services",
        href: "https://findtreatment.gov/",
    },
];
