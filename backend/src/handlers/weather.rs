//! HTTP handlers for forecast, rain-risk, and contamination endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    validate_coordinates, validate_lookahead_hours, GpsCoordinates, HourlySeries,
    DEFAULT_LOOKAHEAD_HOURS,
};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::external::contamination::ContaminationClient;
use crate::external::forecast::ForecastClient;
use crate::services::weather::{ContaminationAssessment, RainRiskReport, WeatherService};
use crate::AppState;

/// Query parameters for forecast lookups
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
}

/// Query parameters for the rain-risk scan
#[derive(Debug, Deserialize)]
pub struct RainRiskQuery {
    pub latitude: Decimal,
    pub longitude: Decimal,
    pub lookahead_hours: Option<usize>,
}

/// Body for the contamination assessment
#[derive(Debug, Deserialize, Validate)]
pub struct ContaminationBody {
    pub latitude: Decimal,
    pub longitude: Decimal,
    #[validate(range(min = 0.0, message = "Turbidity cannot be negative"))]
    pub turbidity: f64,
}

fn checked_coordinates(latitude: Decimal, longitude: Decimal) -> AppResult<GpsCoordinates> {
    let coords = GpsCoordinates::new(latitude, longitude);
    validate_coordinates(&coords).map_err(|msg| AppError::ValidationError(msg.to_string()))?;
    Ok(coords)
}

fn forecast_client(state: &AppState) -> ForecastClient {
    ForecastClient::new(
        state.config.forecast.base_url.clone(),
        state.config.forecast.forecast_days,
    )
}

/// Get the hourly forecast for a location
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<HourlySeries>> {
    let coords = checked_coordinates(query.latitude, query.longitude)?;
    let service = WeatherService::new(forecast_client(&state));
    let series = service.get_forecast(&coords).await?;
    Ok(Json(series))
}

/// Scan the forecast for near-term rain risk
pub async fn get_rain_risk(
    State(state): State<AppState>,
    Query(query): Query<RainRiskQuery>,
) -> AppResult<Json<RainRiskReport>> {
    let coords = checked_coordinates(query.latitude, query.longitude)?;
    let lookahead = query.lookahead_hours.unwrap_or(DEFAULT_LOOKAHEAD_HOURS);
    validate_lookahead_hours(lookahead)
        .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

    let service = WeatherService::new(forecast_client(&state));
    let report = service.rain_risk(&coords, Utc::now(), lookahead).await?;
    Ok(Json(report))
}

/// Run the full contamination assessment for a location and turbidity
pub async fn assess_contamination(
    State(state): State<AppState>,
    Json(input): Json<ContaminationBody>,
) -> AppResult<Json<ContaminationAssessment>> {
    input
        .validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;
    let coords = checked_coordinates(input.latitude, input.longitude)?;

    let service = WeatherService::with_contamination(
        forecast_client(&state),
        ContaminationClient::new(state.config.prediction.contamination_url.clone()),
    );
    let assessment = service
        .assess_contamination(&coords, input.turbidity, Utc::now())
        .await?;
    Ok(Json(assessment))
}
