//! Forecast provider client
//!
//! Integrates with an Open-Meteo-compatible API for hourly precipitation,
//! probability, temperature, and humidity arrays

use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;
use shared::{validate_series_alignment, GpsCoordinates, HourlySeries};

use crate::error::{AppError, AppResult};

/// Forecast API client
#[derive(Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
    forecast_days: u8,
}

/// Raw Open-Meteo forecast response
#[derive(Debug, Deserialize)]
struct OpenMeteoResponse {
    hourly: OpenMeteoHourly,
}

/// Raw hourly arrays; the provider reports gaps as nulls
#[derive(Debug, Deserialize)]
struct OpenMeteoHourly {
    time: Vec<String>,
    #[serde(default)]
    precipitation: Vec<Option<f64>>,
    #[serde(default)]
    precipitation_probability: Vec<Option<f64>>,
    #[serde(default)]
    temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    relativehumidity_2m: Vec<Option<f64>>,
}

impl ForecastClient {
    /// Create a new ForecastClient
    pub fn new(base_url: String, forecast_days: u8) -> Self {
        Self {
            client: Client::new(),
            base_url,
            forecast_days,
        }
    }

    /// Fetch the hourly forecast for a location
    pub async fn get_hourly_forecast(&self, coords: &GpsCoordinates) -> AppResult<HourlySeries> {
        let url = format!(
            "{}/v1/forecast?latitude={}&longitude={}&hourly=precipitation,precipitation_probability,temperature_2m,relativehumidity_2m&forecast_days={}",
            self.base_url, coords.latitude, coords.longitude, self.forecast_days
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("Forecast request failed: {}", e);
            AppError::ForecastServiceUnavailable
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Forecast API error: {} - {}",
                status, body
            )));
        }

        let data: OpenMeteoResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse forecast response: {}", e))
        })?;

        convert_hourly(data.hourly)
    }
}

/// Open-Meteo hourly timestamps are ISO minutes ("2024-06-01T14:00"),
/// occasionally with seconds
fn parse_forecast_time(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// An array the provider omitted entirely becomes all-gaps; the scan reads
/// gaps as zero, matching how absent arrays behave downstream
fn normalized(mut values: Vec<Option<f64>>, len: usize) -> Vec<Option<f64>> {
    if values.is_empty() {
        values.resize(len, None);
    }
    values
}

fn convert_hourly(hourly: OpenMeteoHourly) -> AppResult<HourlySeries> {
    let mut time = Vec::with_capacity(hourly.time.len());
    for raw in &hourly.time {
        let parsed = parse_forecast_time(raw).ok_or_else(|| {
            AppError::ExternalService(format!("Unparseable forecast timestamp: {}", raw))
        })?;
        time.push(parsed.and_utc());
    }

    let len = time.len();
    let series = HourlySeries {
        time,
        precipitation_mm: normalized(hourly.precipitation, len),
        precipitation_probability: normalized(hourly.precipitation_probability, len),
        temperature_celsius: normalized(hourly.temperature_2m, len),
        humidity_percent: normalized(hourly.relativehumidity_2m, len),
    };

    validate_series_alignment(&series)
        .map_err(|msg| AppError::ExternalService(format!("Malformed forecast series: {}", msg)))?;

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forecast_time_minutes() {
        let parsed = parse_forecast_time("2024-06-01T14:00").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2024-06-01 14:00");
    }

    #[test]
    fn test_parse_forecast_time_seconds() {
        assert!(parse_forecast_time("2024-06-01T14:00:30").is_some());
    }

    #[test]
    fn test_parse_forecast_time_invalid() {
        assert!(parse_forecast_time("not-a-time").is_none());
        assert!(parse_forecast_time("2024-06-01").is_none());
    }

    #[test]
    fn test_convert_hourly_preserves_gaps() {
        let hourly = OpenMeteoHourly {
            time: vec!["2024-06-01T00:00".to_string(), "2024-06-01T01:00".to_string()],
            precipitation: vec![Some(0.4), None],
            precipitation_probability: vec![None, Some(60.0)],
            temperature_2m: vec![Some(24.0), Some(23.5)],
            relativehumidity_2m: vec![Some(70.0), None],
        };

        let series = convert_hourly(hourly).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.precipitation_at(0), 0.4);
        assert_eq!(series.precipitation_at(1), 0.0);
        assert_eq!(series.probability_at(0), 0.0);
        assert_eq!(series.probability_at(1), 60.0);
        assert_eq!(series.humidity_at(1), None);
    }

    #[test]
    fn test_convert_hourly_fills_absent_arrays_with_gaps() {
        let hourly = OpenMeteoHourly {
            time: vec!["2024-06-01T00:00".to_string(), "2024-06-01T01:00".to_string()],
            precipitation: vec![Some(0.4), Some(0.1)],
            precipitation_probability: Vec::new(),
            temperature_2m: Vec::new(),
            relativehumidity_2m: Vec::new(),
        };

        let series = convert_hourly(hourly).unwrap();
        assert_eq!(series.probability_at(0), 0.0);
        assert_eq!(series.temperature_at(1), None);
    }

    #[test]
    fn test_convert_hourly_rejects_ragged_arrays() {
        let hourly = OpenMeteoHourly {
            time: vec!["2024-06-01T00:00".to_string(), "2024-06-01T01:00".to_string()],
            precipitation: vec![Some(0.4)],
            precipitation_probability: vec![Some(10.0), Some(20.0)],
            temperature_2m: vec![Some(24.0), Some(23.5)],
            relativehumidity_2m: vec![Some(70.0), None],
        };
        assert!(convert_hourly(hourly).is_err());
    }

    #[test]
    fn test_convert_hourly_rejects_bad_timestamp() {
        let hourly = OpenMeteoHourly {
            time: vec!["garbage".to_string()],
            precipitation: vec![Some(0.0)],
            precipitation_probability: vec![Some(0.0)],
            temperature_2m: vec![Some(0.0)],
            relativehumidity_2m: vec![Some(0.0)],
        };
        assert!(convert_hourly(hourly).is_err());
    }
}
