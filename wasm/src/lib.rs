//! WebAssembly module for the Water Quality Advisor Platform
//!
//! Provides client-side computation for:
//! - Water quality evaluation and advisory tips
//! - Extended WHO contaminant panel assessment
//! - Rain-risk scanning over an already-fetched forecast

use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {}

/// Evaluate a reading and return the full advisory report as JSON
#[wasm_bindgen]
pub fn evaluate_water_quality(
    ph: f64,
    tds: f64,
    turbidity: f64,
    temperature: f64,
) -> Result<String, JsValue> {
    let reading = WaterReading {
        ph,
        tds_ppm: tds,
        turbidity_ntu: turbidity,
        temperature_celsius: temperature,
    };
    let report = evaluate_reading(&reading);
    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize report: {}", e)))
}

/// Quality label for a reading ("Good", "Fair", "Poor")
#[wasm_bindgen]
pub fn water_quality_label(ph: f64, tds: f64, turbidity: f64, temperature: f64) -> String {
    let reading = WaterReading {
        ph,
        tds_ppm: tds,
        turbidity_ntu: turbidity,
        temperature_celsius: temperature,
    };
    format!("{}", evaluate_reading(&reading).label)
}

/// Assess the nine-parameter contaminant panel supplied as JSON
#[wasm_bindgen]
pub fn assess_contaminant_panel(panel_json: &str) -> Result<String, JsValue> {
    let panel: ContaminantPanel = serde_json::from_str(panel_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid panel JSON: {}", e)))?;
    let report = assess_panel(&panel);
    serde_json::to_string(&report)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize report: {}", e)))
}

/// Scan an hourly forecast series (JSON) for rain risk. `now` is RFC 3339 so
/// callers stay in control of the clock.
#[wasm_bindgen]
pub fn scan_rain_risk(
    series_json: &str,
    now_rfc3339: &str,
    lookahead_hours: usize,
) -> Result<String, JsValue> {
    let series: HourlySeries = serde_json::from_str(series_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid series JSON: {}", e)))?;
    let now: DateTime<Utc> = now_rfc3339
        .parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid timestamp: {}", e)))?;

    let summary = analyze_rain_risk(&series, now, lookahead_hours);
    serde_json::to_string(&summary)
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize summary: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_quality_label() {
        assert_eq!(water_quality_label(7.0, 100.0, 1.0, 25.0), "Good");
        assert_eq!(water_quality_label(7.0, 320.0, 2.0, 20.0), "Fair");
        assert_eq!(water_quality_label(5.0, 600.0, 6.0, 35.0), "Poor");
    }

    #[test]
    fn test_evaluate_reports_four_tips() {
        let json = evaluate_water_quality(7.0, 100.0, 1.0, 25.0).unwrap();
        let report: AdviceReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.advice.len(), 4);
        assert_eq!(report.label, QualityLabel::Good);
    }

    #[test]
    fn test_assess_panel_json() {
        let panel = r#"{
            "ph": 7.0, "tds_ppm": 150.0, "turbidity_ntu": 0.8,
            "temperature_celsius": 22.0, "lead_mg_l": 0.005,
            "arsenic_mg_l": 0.005, "nitrates_mg_l": 5.0,
            "fluoride_mg_l": 0.7, "bacteria_cfu": 0.0
        }"#;
        let json = assess_contaminant_panel(panel).unwrap();
        let report: PanelReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.overall, OverallStatus::Excellent);
    }

    #[test]
    fn test_scan_rain_risk_json() {
        let series = r#"{
            "time": ["2024-06-01T06:00:00Z", "2024-06-01T07:00:00Z", "2024-06-01T08:00:00Z"],
            "precipitation_mm": [0.0, 0.0, 0.5],
            "precipitation_probability": [10.0, 20.0, 30.0],
            "temperature_celsius": [null, null, null],
            "humidity_percent": [null, null, null]
        }"#;
        let json = scan_rain_risk(series, "2024-06-01T06:00:00Z", 2).unwrap();
        let summary: Option<RainRiskSummary> = serde_json::from_str(&json).unwrap();
        assert_eq!(summary.unwrap().earliest_likely_index, Some(2));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(assess_contaminant_panel("not json").is_err());
        assert!(scan_rain_risk("[]", "2024-06-01T06:00:00Z", 3).is_err());
        assert!(scan_rain_risk("{\"time\":[]}", "junk", 3).is_err());
    }
}
