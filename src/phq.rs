//! PHQ input normalization
//!
//! Upstream PHQ scoring may deliver its result as a bare number, a numeric
//! string, or an object exposing `score` or `prediction`. This module is the
//! single coercion path from that union to a finite `f64`, plus the standard
//! PHQ-9 severity banding used when the model supplies no severity label.

use serde::{Deserialize, Serialize};

/// Raw PHQ model output in any of its wire shapes.
///
/// Undefined or unparseable input coerces to `0.0` rather than erroring;
/// callers should present that as "awaiting model output", not as a
/// confirmed stable reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PhqInput {
    /// Bare numeric score
    Score(f64),
    /// Numeric string
    Text(String),
    /// Structured model payload
    Payload(PhqPayload),
}

/// Structured PHQ model payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhqPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction: Option<f64>,
    /// Model-supplied severity label, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl PhqInput {
    /// Coerce to a finite score, conceptually in the PHQ-9 range [0, 27].
    ///
    /// `score` takes precedence over `prediction` in the payload form.
    /// Anything non-finite or unparseable coerces to 0.0.
    pub fn normalize(&self) -> f64 {
        match self {
            PhqInput::Score(value) if value.is_finite() => *value,
            PhqInput::Score(_) => 0.0,
            PhqInput::Text(raw) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .unwrap_or(0.0),
            PhqInput::Payload(payload) => payload
                .score
                .or(payload.prediction)
                .filter(|value| value.is_finite())
                .unwrap_or(0.0),
        }
    }

    /// Severity label for this input: the model-supplied one when present,
    /// otherwise the standard PHQ-9 band of the normalized score.
    pub fn severity_label(&self) -> String {
        if let PhqInput::Payload(payload) = self {
            if let Some(severity) = &payload.severity {
                return severity.clone();
            }
        }
        severity_band(self.normalize()).to_string()
    }
}

/// Standard PHQ-9 severity bands
pub fn severity_band(score: f64) -> &'static str {
    if score >= 20.0 {
        "Severe"
    } else if score >= 15.0 {
        "Moderately severe"
    } else if score >= 10.0 {
        "Moderate"
    } else if score >= 5.0 {
        "Mild"
    } else {
        "Minimal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_normalize_bare_number() {
        assert_eq!(PhqInput::Score(14.0).normalize(), 14.0);
        assert_eq!(PhqInput::Score(f64::NAN).normalize(), 0.0);
        assert_eq!(PhqInput::Score(f64::INFINITY).normalize(), 0.0);
    }

    #[test]
    fn test_normalize_numeric_string() {
        assert_eq!(PhqInput::Text("12.5".to_string()).normalize(), 12.5);
        assert_eq!(PhqInput::Text(" 7 ".to_string()).normalize(), 7.0);
        assert_eq!(PhqInput::Text("not a number".to_string()).normalize(), 0.0);
        assert_eq!(PhqInput::Text(String::new()).normalize(), 0.0);
    }

    #[test]
    fn test_normalize_payload_prefers_score() {
        let payload = PhqInput::Payload(PhqPayload {
            score: Some(18.0),
            prediction: Some(3.0),
            severity: None,
        });
        assert_eq!(payload.normalize(), 18.0);

        let prediction_only = PhqInput::Payload(PhqPayload {
            score: None,
            prediction: Some(3.0),
            severity: None,
        });
        assert_eq!(prediction_only.normalize(), 3.0);

        let empty = PhqInput::Payload(PhqPayload::default());
        assert_eq!(empty.normalize(), 0.0);
    }

    #[test]
    fn test_deserializes_all_wire_shapes() {
        let from_number: PhqInput = serde_json::from_str("21.5").unwrap();
        assert_eq!(from_number.normalize(), 21.5);

        let from_string: PhqInput = serde_json::from_str("\"9\"").unwrap();
        assert_eq!(from_string.normalize(), 9.0);

        let from_score: PhqInput = serde_json::from_str(r#"{"score": 11}"#).unwrap();
        assert_eq!(from_score.normalize(), 11.0);

        let from_prediction: PhqInput = serde_json::from_str(r#"{"prediction": 4}"#).unwrap();
        assert_eq!(from_prediction.normalize(), 4.0);
    }

    #[test]
    fn test_severity_band_boundaries() {
        assert_eq!(severity_band(0.0), "Minimal");
        assert_eq!(severity_band(5.0), "Mild");
        assert_eq!(severity_band(10.0), "Moderate");
        assert_eq!(severity_band(15.0), "Moderately severe");
        assert_eq!(severity_band(20.0), "Severe");
        assert_eq!(severity_band(27.0), "Severe");
    }

    #[test]
    fn test_severity_label_prefers_model_supplied() {
        let payload = PhqInput::Payload(PhqPayload {
            score: Some(22.0),
            prediction: None,
            severity: Some("Provider severe".to_string()),
        });
        assert_eq!(payload.severity_label(), "Provider severe");

        let unlabeled = PhqInput::Payload(PhqPayload {
            score: Some(22.0),
            prediction: None,
            severity: None,
        });
        assert_eq!(unlabeled.severity_label(), "Severe");
    }
}
