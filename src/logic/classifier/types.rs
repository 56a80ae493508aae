use serde::{Deserialize, Serialize};

/// Final decision returned by the external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Decision {
    Normal,
    Suspicious,
    Attack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

/// Advisory classification of the trailing telemetry window.
///
/// Never mutates the simulation phase, only the displayed status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassifierResult {
    #[serde(rename = "final_decision")]
    pub decision: Decision,
    pub risk_score: f64,
    pub confidence: Confidence,
}

/// Request body: trailing telemetry points, oldest first.
#[derive(Debug, Serialize)]
pub struct PredictRequest {
    pub sensor_data: Vec<[f64; 3]>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_classifier_response() {
        let raw = r#"{"final_decision":"ATTACK","risk_score":91,"confidence":"HIGH"}"#;
        let result: ClassifierResult = serde_json::from_str(raw).unwrap();

        assert_eq!(result.decision, Decision::Attack);
        assert_eq!(result.risk_score, 91.0);
        assert_eq!(result.confidence, Confidence::High);
    }

    #[test]
    fn test_extra_fields_tolerated() {
        // Backend also reports a raw mahalanobis score; ignore it
        let raw = r#"{"final_decision":"SUSPICIOUS","risk_score":44.5,"mahal_score":2.2,"confidence":"MEDIUM"}"#;
        let result: ClassifierResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.decision, Decision::Suspicious);
    }

    #[test]
    fn test_unknown_decision_rejected() {
        let raw = r#"{"final_decision":"PANIC","risk_score":1,"confidence":"LOW"}"#;
        assert!(serde_json::from_str::<ClassifierResult>(raw).is_err());
    }

    #[test]
    fn test_request_shape() {
        let req = PredictRequest {
            sensor_data: vec![[72.0, 40.0, 68.0]],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"sensor_data":[[72.0,40.0,68.0]]}"#);
    }
}
