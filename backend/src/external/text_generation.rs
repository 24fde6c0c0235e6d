//! Text-generation service client
//!
//! Builds category-specific prompts around the current readings and calls a
//! Cohere-style generate endpoint for advisory prose.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use shared::{AdviceCategory, WaterReading};

use crate::config::AiConfig;
use crate::error::{AppError, AppResult};

/// Fixed fallback when the service returns no generations
const NO_RESPONSE_FALLBACK: &str = "No AI response received.";

/// Client for the text-generation service
#[derive(Clone)]
pub struct TextGenerationClient {
    base_url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f64,
    http_client: Client,
}

/// Generate request body
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
}

/// Generate response body
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    generations: Vec<Generation>,
}

#[derive(Debug, Deserialize)]
struct Generation {
    text: String,
}

/// Build the prompt for an advisory category around the current readings
pub fn build_prompt(category: AdviceCategory, reading: &WaterReading) -> String {
    let parameters = format!(
        "Water Quality Parameters:\npH: {}, TDS: {} ppm, Turbidity: {} NTU, Temperature: {}°C.",
        reading.ph, reading.tds_ppm, reading.turbidity_ntu, reading.temperature_celsius
    );

    let ask = match category {
        AdviceCategory::Prevention => "Give me prevention recommendations to keep this water safe.",
        AdviceCategory::Filtration => "Suggest the best filtration methods and systems for this water.",
        AdviceCategory::Cost => "Estimate the cost breakdown for a purification system suitable for this water.",
    };

    format!("{}\n\n{}", parameters, ask)
}

impl TextGenerationClient {
    /// Create a new text-generation client
    pub fn new(config: &AiConfig) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            http_client,
        }
    }

    /// Generate advisory text for a category and reading
    pub async fn generate_advice(
        &self,
        category: AdviceCategory,
        reading: &WaterReading,
    ) -> AppResult<String> {
        let prompt = build_prompt(category, reading);
        let url = format!("{}/v1/generate", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&GenerateRequest {
                model: &self.model,
                prompt: &prompt,
                max_tokens: self.max_tokens,
                temperature: self.temperature,
            })
            .send()
            .await
            .map_err(|e| AppError::TextGenerationError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::TextGenerationError(format!(
                "API returned {}: {}",
                status, body
            )));
        }

        let result: GenerateResponse = response.json().await.map_err(|e| {
            AppError::TextGenerationError(format!("Failed to parse response: {}", e))
        })?;

        let text = result
            .generations
            .into_iter()
            .map(|g| g.text)
            .find(|t| !t.is_empty())
            .unwrap_or_else(|| NO_RESPONSE_FALLBACK.to_string());

        Ok(text)
    }
}
