//! Disease-risk service client
//!
//! Client for the hosted waterborne-disease prediction microservice. The
//! response is passed through to callers unchanged.

use std::collections::HashMap;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Client for the disease-risk microservice
#[derive(Clone)]
pub struct DiseaseClient {
    endpoint: String,
    http_client: Client,
}

/// Request payload; the remote service expects "pH" capitalization
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseRequest {
    #[serde(rename = "pH")]
    pub ph: f64,
    pub tds: f64,
    pub turbidity: f64,
}

/// Echo of the submitted readings, as returned by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseInputEcho {
    #[serde(rename = "pH")]
    pub ph: f64,
    pub tds: f64,
    pub turbidity: f64,
}

/// Response from the disease-risk service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseResponse {
    pub advice: String,
    pub predicted_risk: String,
    /// Probability per risk category, 0-1
    pub confidence_scores: HashMap<String, f64>,
    pub input: DiseaseInputEcho,
}

impl DiseaseClient {
    /// Create a new disease-risk client
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http_client: Client::new(),
        }
    }

    /// Request a disease-risk prediction for the given readings
    pub async fn predict(&self, request: &DiseaseRequest) -> AppResult<DiseaseResponse> {
        let response = self
            .http_client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| AppError::PredictionServiceError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::PredictionServiceError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: DiseaseResponse = response.json().await.map_err(|e| {
            AppError::PredictionServiceError(format!("Failed to parse response: {}", e))
        })?;

        Ok(result)
    }
}
