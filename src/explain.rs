//! Explainability summary builder
//!
//! Produces a ranked, bounded list of signal attributions for display. When
//! the NLP model supplies feature attributions they are used directly;
//! otherwise a deterministic summary is synthesized from the passive-signal
//! catalog, with each signal reported as more influential at higher tiers.

use crate::catalog;
use crate::types::{FeatureEffect, NlpPrediction};

/// Maximum number of entries in a summary
pub const MAX_FEATURES: usize = 5;

/// Default impact for ranked slot `index` when the model omits one.
/// Deterministic and monotonically derived from rank so the UI always has a
/// usable placeholder.
fn default_impact(index: usize) -> f64 {
    0.15 + 0.03 * index as f64
}

/// Build an explainability summary from an NLP prediction.
///
/// Returns an empty list when there is no prediction. The result is always
/// at most [`MAX_FEATURES`] entries, ranked consistently with the source
/// ordering (model rank, or catalog base-effect order for the synthesized
/// fallback).
pub fn build_explainability_summary(nlp: Option<&NlpPrediction>) -> Vec<FeatureEffect> {
    let Some(prediction) = nlp else {
        return Vec::new();
    };

    if !prediction.top_features.is_empty() {
        return prediction
            .top_features
            .iter()
            .take(MAX_FEATURES)
            .enumerate()
            .map(|(index, feature)| FeatureEffect {
                name: if feature.feature.is_empty() {
                    format!("Signal {}", index + 1)
                } else {
                    feature.feature.clone()
                },
                effect: feature.impact.unwrap_or_else(|| default_impact(index)),
            })
            .collect();
    }

    let seed = prediction.risk_tier.map(|tier| tier as u8).unwrap_or(0) as f64;

    catalog::passive_signals()
        .iter()
        .map(|signal| FeatureEffect {
            name: signal.label.to_string(),
            effect: round2(signal.base_effect + seed * signal.tier_boost),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RiskTier, TopFeature};
    use pretty_assertions::assert_eq;

    fn prediction_with_features(features: Vec<TopFeature>) -> NlpPrediction {
        NlpPrediction {
            predicted_class: "stress".to_string(),
            confidence: 0.8,
            risk_tier: None,
            top_features: features,
        }
    }

    fn prediction_with_tier(tier: Option<RiskTier>) -> NlpPrediction {
        NlpPrediction {
            predicted_class: "neutral".to_string(),
            confidence: 0.5,
            risk_tier: tier,
            top_features: Vec::new(),
        }
    }

    #[test]
    fn test_no_prediction_yields_empty() {
        assert!(build_explainability_summary(None).is_empty());
    }

    #[test]
    fn test_model_features_pass_through() {
        let prediction = prediction_with_features(vec![
            TopFeature {
                feature: "sleep.offset.wd.sd".to_string(),
                impact: Some(0.61),
            },
            TopFeature {
                feature: "NHR.0204.cv".to_string(),
                impact: Some(0.44),
            },
        ]);

        let summary = build_explainability_summary(Some(&prediction));
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].name, "sleep.offset.wd.sd");
        assert_eq!(summary[0].effect, 0.61);
        assert_eq!(summary[1].effect, 0.44);
    }

    #[test]
    fn test_length_bound() {
        let features = (0..8)
            .map(|i| TopFeature {
                feature: format!("f{i}"),
                impact: Some(0.5),
            })
            .collect();

        let summary = build_explainability_summary(Some(&prediction_with_features(features)));
        assert_eq!(summary.len(), MAX_FEATURES);
    }

    #[test]
    fn test_missing_impact_defaults_by_rank() {
        let features = vec![
            TopFeature {
                feature: "a".to_string(),
                impact: None,
            },
            TopFeature {
                feature: "b".to_string(),
                impact: None,
            },
            TopFeature {
                feature: "c".to_string(),
                impact: None,
            },
        ];

        let summary = build_explainability_summary(Some(&prediction_with_features(features)));
        assert_eq!(summary[0].effect, 0.15);
        assert_eq!(summary[1].effect, 0.18);
        assert_eq!(summary[2].effect, 0.21);
    }

    #[test]
    fn test_unnamed_feature_gets_rank_placeholder() {
        let features = vec![TopFeature {
            feature: String::new(),
            impact: Some(0.3),
        }];

        let summary = build_explainability_summary(Some(&prediction_with_features(features)));
        assert_eq!(summary[0].name, "Signal 1");
    }

    #[test]
    fn test_synthesized_fallback_at_tier_zero() {
        let summary = build_explainability_summary(Some(&prediction_with_tier(None)));

        assert_eq!(summary.len(), 5);
        assert_eq!(summary[0].name, "Sleep timing variability");
        assert_eq!(summary[0].effect, 0.42);
        assert_eq!(summary[4].name, "Activity peak irregularity");
        assert_eq!(summary[4].effect, 0.20);
    }

    #[test]
    fn test_synthesized_fallback_boosted_by_tier() {
        let summary =
            build_explainability_summary(Some(&prediction_with_tier(Some(RiskTier::Critical))));

        // base + 2 * boost, rounded to 2 decimals
        assert_eq!(summary[0].effect, 0.54);
        assert_eq!(summary[1].effect, 0.46);
        assert_eq!(summary[2].effect, 0.40);
        assert_eq!(summary[3].effect, 0.33);
        assert_eq!(summary[4].effect, 0.26);
    }

    #[test]
    fn test_idempotence() {
        let prediction = prediction_with_tier(Some(RiskTier::Moderate));
        let first = build_explainability_summary(Some(&prediction));
        let second = build_explainability_summary(Some(&prediction));
        assert_eq!(first, second);
    }
}
