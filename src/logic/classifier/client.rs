use std::time::Duration;

use crate::constants::CLASSIFIER_TIMEOUT_SECS;

use super::types::{ClassifierResult, PredictRequest};

/// HTTP client for the external classifier service.
pub struct ClassifierClient {
    url: String,
    http_client: reqwest::Client,
}

impl ClassifierClient {
    pub fn new(url: String) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(CLASSIFIER_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self { url, http_client }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POST one trailing window and parse the decision.
    pub async fn predict(&self, window: Vec<[f64; 3]>) -> Result<ClassifierResult, ClassifierError> {
        let request = PredictRequest {
            sensor_data: window,
        };

        let response = self
            .http_client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClassifierError::NetworkError(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| ClassifierError::ParseError(e.to_string()))
        } else {
            Err(ClassifierError::ServerError(response.status().as_u16()))
        }
    }
}

/// Classifier client errors. All recoverable: callers log and keep the
/// previously applied decision.
#[derive(Debug, Clone)]
pub enum ClassifierError {
    NetworkError(String),
    ServerError(u16),
    ParseError(String),
}

impl std::fmt::Display for ClassifierError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError(e) => write!(f, "Network error: {}", e),
            Self::ServerError(code) => write!(f, "Server error: {}", code),
            Self::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ClassifierError {}
