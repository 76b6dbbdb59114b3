use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::PredictionError;

/// JSON body returned by the prediction service.
/// Error responses carry only `error`, so everything else is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub prediction: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Confidence for every category, when the service reports them.
    #[serde(default)]
    pub all_confidences: Option<BTreeMap<String, f64>>,
    /// Set when the service is answering with random demo predictions.
    #[serde(default)]
    pub demo_mode: Option<bool>,
    #[serde(default)]
    pub class_index: Option<u32>,
    #[serde(default)]
    pub error: Option<String>,
}

/// A successful classification.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub label: String,
    /// Confidence of `label`, nominally in 0.0..=1.0.
    pub confidence: f64,
    pub all_confidences: Option<BTreeMap<String, f64>>,
    pub demo_mode: bool,
    pub class_index: Option<u32>,
}

impl PredictionResponse {
    /// Parse a response body.
    pub fn from_json(json: &str) -> Result<Self, PredictionError> {
        serde_json::from_str(json).map_err(|e| PredictionError::Decode(e.to_string()))
    }

    /// Split into a prediction or the error to show. A non-empty `error`
    /// wins over any other field.
    pub fn into_outcome(self) -> Result<Prediction, PredictionError> {
        if let Some(message) = self.error.filter(|m| !m.is_empty()) {
            return Err(PredictionError::Service(message));
        }
        let label = self
            .prediction
            .ok_or_else(|| PredictionError::Decode("response has no prediction".to_string()))?;
        let confidence = self
            .confidence
            .ok_or_else(|| PredictionError::Decode("response has no confidence".to_string()))?;
        Ok(Prediction {
            label,
            confidence,
            all_confidences: self.all_confidences,
            demo_mode: self.demo_mode.unwrap_or(false),
            class_index: self.class_index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_response() {
        let json = r#"{
            "prediction": "normal",
            "confidence": 0.9731,
            "class_index": 0,
            "all_confidences": { "normal": 0.9731, "failure": 0.0269 },
            "demo_mode": true
        }"#;
        let prediction = PredictionResponse::from_json(json).unwrap().into_outcome().unwrap();
        assert_eq!(prediction.label, "normal");
        assert_eq!(prediction.confidence, 0.9731);
        assert_eq!(prediction.class_index, Some(0));
        assert!(prediction.demo_mode);
        assert_eq!(prediction.all_confidences.unwrap().len(), 2);
    }

    #[test]
    fn minimal_response() {
        let json = r#"{ "prediction": "failure", "confidence": 0.61 }"#;
        let prediction = PredictionResponse::from_json(json).unwrap().into_outcome().unwrap();
        assert!(!prediction.demo_mode);
        assert!(prediction.all_confidences.is_none());
    }

    #[test]
    fn error_field_is_surfaced_verbatim() {
        let json = r#"{ "error": "model unavailable" }"#;
        let err = PredictionResponse::from_json(json).unwrap().into_outcome().unwrap_err();
        assert_eq!(err, PredictionError::Service("model unavailable".to_string()));
        assert_eq!(err.to_string(), "model unavailable");
    }

    #[test]
    fn error_wins_over_prediction() {
        let json = r#"{ "prediction": "normal", "confidence": 0.5, "error": "stale model" }"#;
        let err = PredictionResponse::from_json(json).unwrap().into_outcome().unwrap_err();
        assert_eq!(err.to_string(), "stale model");
    }

    #[test]
    fn empty_error_is_ignored() {
        let json = r#"{ "prediction": "normal", "confidence": 0.5, "error": "" }"#;
        assert!(PredictionResponse::from_json(json).unwrap().into_outcome().is_ok());
    }

    #[test]
    fn missing_prediction_is_decode_error() {
        let json = r#"{ "confidence": 0.5 }"#;
        let err = PredictionResponse::from_json(json).unwrap().into_outcome().unwrap_err();
        assert!(matches!(err, PredictionError::Decode(_)));
    }

    #[test]
    fn malformed_body_is_decode_error() {
        let err = PredictionResponse::from_json("<html>").unwrap_err();
        assert!(matches!(err, PredictionError::Decode(_)));
        assert!(err.to_string().starts_with("Error: "));
    }
}
