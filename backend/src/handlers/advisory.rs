//! HTTP handlers for water quality advisory endpoints

use axum::{extract::State, Json};
use serde::Deserialize;
use shared::{
    assess_panel, evaluate_reading, AdviceReport, ContaminantPanel, PanelReport, WaterReading,
};

use crate::error::AppResult;
use crate::external::disease::{DiseaseClient, DiseaseRequest, DiseaseResponse};
use crate::AppState;

/// Reading payload as submitted by clients
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub ph: f64,
    pub tds: f64,
    pub turbidity: f64,
    pub temperature: f64,
}

impl From<&EvaluateRequest> for WaterReading {
    fn from(r: &EvaluateRequest) -> Self {
        WaterReading {
            ph: r.ph,
            tds_ppm: r.tds,
            turbidity_ntu: r.turbidity,
            temperature_celsius: r.temperature,
        }
    }
}

/// Evaluate a reading against the purification rules.
///
/// The scorer is total over raw readings, so the payload is passed through
/// unvalidated on purpose.
pub async fn evaluate_water_quality(Json(input): Json<EvaluateRequest>) -> Json<AdviceReport> {
    Json(evaluate_reading(&WaterReading::from(&input)))
}

/// Assess the full nine-parameter contaminant panel
pub async fn assess_contaminant_panel(Json(input): Json<ContaminantPanel>) -> Json<PanelReport> {
    Json(assess_panel(&input))
}

/// Readings forwarded to the disease-risk service
#[derive(Debug, Deserialize)]
pub struct DiseaseQuery {
    pub ph: f64,
    pub tds: f64,
    pub turbidity: f64,
}

/// Proxy a reading to the disease-risk prediction service
pub async fn predict_disease_risk(
    State(state): State<AppState>,
    Json(input): Json<DiseaseQuery>,
) -> AppResult<Json<DiseaseResponse>> {
    let client = DiseaseClient::new(state.config.prediction.disease_url.clone());
    let result = client
        .predict(&DiseaseRequest {
            ph: input.ph,
            tds: input.tds,
            turbidity: input.turbidity,
        })
        .await?;
    Ok(Json(result))
}
