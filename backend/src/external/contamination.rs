//! Contamination-probability service client
//!
//! Client for the hosted contamination-prediction microservice. The payload
//! is derived from the rain-risk scan window plus the submitted turbidity.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Client for the contamination-probability microservice
#[derive(Clone)]
pub struct ContaminationClient {
    endpoint: String,
    http_client: Client,
}

/// Request payload for a contamination prediction
#[derive(Debug, Clone, Serialize)]
pub struct ContaminationRequest {
    /// Rainfall over the lookahead window (mm, one decimal place)
    pub rainfall: f64,
    /// Temperature at the window start (°C, one decimal place)
    pub temperature: f64,
    /// Humidity at the window start (whole percent)
    pub humidity: i32,
    /// Current turbidity reading (NTU)
    pub turbidity: f64,
}

/// Response from the contamination-probability service
#[derive(Debug, Deserialize)]
pub struct ContaminationResponse {
    /// Probability of contamination, 0-100
    pub contamination_probability: f64,
}

/// Qualitative banding of the returned probability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// Band a probability: below 30 Low, below 60 Moderate, below 80 High,
    /// otherwise Very High
    pub fn from_probability(probability: f64) -> Self {
        if probability < 30.0 {
            RiskLevel::Low
        } else if probability < 60.0 {
            RiskLevel::Moderate
        } else if probability < 80.0 {
            RiskLevel::High
        } else {
            RiskLevel::VeryHigh
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Moderate => write!(f, "Moderate"),
            RiskLevel::High => write!(f, "High"),
            RiskLevel::VeryHigh => write!(f, "Very High"),
        }
    }
}

impl ContaminationClient {
    /// Create a new contamination client
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http_client: Client::new(),
        }
    }

    /// Request a contamination probability for the given conditions
    pub async fn predict(&self, request: &ContaminationRequest) -> AppResult<ContaminationResponse> {
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

        let result: ContaminationResponse = response.json().await.map_err(|e| {
            AppError::PredictionServiceError(format!("Failed to parse response: {}", e))
        })?;

        Ok(result)
    }
}
