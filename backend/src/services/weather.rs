//! Weather orchestration: forecast retrieval, rain risk, and the combined
//! contamination assessment

use chrono::{DateTime, Utc};
use serde::Serialize;
use shared::{
    analyze_rain_risk, window_conditions, GpsCoordinates, HourlySeries, RainRiskSummary,
    DEFAULT_LOOKAHEAD_HOURS,
};

use crate::error::{AppError, AppResult};
use crate::external::contamination::{ContaminationClient, ContaminationRequest, RiskLevel};
use crate::external::forecast::ForecastClient;

/// Weather service coordinating the forecast provider and the
/// contamination-probability service
pub struct WeatherService {
    forecast_client: ForecastClient,
    contamination_client: Option<ContaminationClient>,
}

/// Rain-risk scan result plus its presentation headline
#[derive(Debug, Clone, Serialize)]
pub struct RainRiskReport {
    pub headline: String,
    pub summary: Option<RainRiskSummary>,
}

/// Combined output of the contamination assessment flow
#[derive(Debug, Clone, Serialize)]
pub struct ContaminationAssessment {
    pub headline: String,
    pub rain_risk: Option<RainRiskSummary>,
    /// Payload values sent to the prediction service
    pub rainfall_mm: f64,
    pub temperature_celsius: f64,
    pub humidity_percent: i32,
    /// Probability returned by the prediction service, 0-100
    pub contamination_probability: f64,
    pub risk_level: RiskLevel,
}

impl WeatherService {
    /// Create a WeatherService without the contamination client
    pub fn new(forecast_client: ForecastClient) -> Self {
        Self {
            forecast_client,
            contamination_client: None,
        }
    }

    /// Create a WeatherService with the contamination client
    pub fn with_contamination(
        forecast_client: ForecastClient,
        contamination_client: ContaminationClient,
    ) -> Self {
        Self {
            forecast_client,
            contamination_client: Some(contamination_client),
        }
    }

    /// Fetch the hourly forecast for a location
    pub async fn get_forecast(&self, coords: &GpsCoordinates) -> AppResult<HourlySeries> {
        self.forecast_client.get_hourly_forecast(coords).await
    }

    /// Fetch the forecast and scan it for near-term rain risk
    pub async fn rain_risk(
        &self,
        coords: &GpsCoordinates,
        now: DateTime<Utc>,
        lookahead_hours: usize,
    ) -> AppResult<RainRiskReport> {
        let series = self.get_forecast(coords).await?;
        Ok(Self::rain_risk_report(&series, now, lookahead_hours))
    }

    /// Scan an already-fetched series and attach the headline
    pub fn rain_risk_report(
        series: &HourlySeries,
        now: DateTime<Utc>,
        lookahead_hours: usize,
    ) -> RainRiskReport {
        let summary = analyze_rain_risk(series, now, lookahead_hours);
        let headline = match &summary {
            Some(s) => s.headline(series),
            None => "No forecast data available.".to_string(),
        };
        RainRiskReport { headline, summary }
    }

    /// Full contamination assessment: fetch the forecast, scan for rain
    /// risk, derive the rounded window conditions, and ask the prediction
    /// service for a probability
    pub async fn assess_contamination(
        &self,
        coords: &GpsCoordinates,
        turbidity: f64,
        now: DateTime<Utc>,
    ) -> AppResult<ContaminationAssessment> {
        let client = self.contamination_client.as_ref().ok_or_else(|| {
            AppError::Configuration("Contamination service not configured".to_string())
        })?;

        let series = self.get_forecast(coords).await?;
        let report = Self::rain_risk_report(&series, now, DEFAULT_LOOKAHEAD_HOURS);
        let conditions = window_conditions(&series, now, DEFAULT_LOOKAHEAD_HOURS);

        let request = ContaminationRequest {
            rainfall: conditions.rainfall_mm,
            temperature: conditions.temperature_celsius,
            humidity: conditions.humidity_percent,
            turbidity,
        };
        let response = client.predict(&request).await?;

        Ok(ContaminationAssessment {
            headline: report.headline,
            rain_risk: report.summary,
            rainfall_mm: request.rainfall,
            temperature_celsius: request.temperature,
            humidity_percent: request.humidity,
            contamination_probability: response.contamination_probability,
            risk_level: RiskLevel::from_probability(response.contamination_probability),
        })
    }
}
