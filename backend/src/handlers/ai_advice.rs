//! HTTP handlers for AI advisory text generation

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use shared::{AdviceCategory, WaterReading};

use crate::error::{AppError, AppResult};
use crate::external::text_generation::TextGenerationClient;
use crate::AppState;

/// Request for generated advisory text
#[derive(Debug, Deserialize)]
pub struct AiAdviceRequest {
    pub category: AdviceCategory,
    pub ph: f64,
    pub tds: f64,
    pub turbidity: f64,
    pub temperature: f64,
}

/// Generated advisory text for one category
#[derive(Debug, Serialize)]
pub struct AiAdviceResponse {
    pub category: AdviceCategory,
    pub text: String,
}

/// Generate advisory prose for the current readings
pub async fn generate_ai_advice(
    State(state): State<AppState>,
    Json(input): Json<AiAdviceRequest>,
) -> AppResult<Json<AiAdviceResponse>> {
    if state.config.ai.api_key.is_empty() {
        return Err(AppError::Configuration(
            "Text generation API key not configured".to_string(),
        ));
    }

    let client = TextGenerationClient::new(&state.config.ai);
    let reading = WaterReading {
        ph: input.ph,
        tds_ppm: input.tds,
        turbidity_ntu: input.turbidity,
        temperature_celsius: input.temperature,
    };

    let text = client.generate_advice(input.category, &reading).await?;
    Ok(Json(AiAdviceResponse {
        category: input.category,
        text,
    }))
}
