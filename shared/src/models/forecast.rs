//! Hourly forecast series and the near-term rain risk scan

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Precipitation amount that counts as likely rain (mm per hour)
pub const RAIN_PRECIP_TRIGGER_MM: f64 = 0.2;

/// Precipitation probability that counts as likely rain (percent)
pub const RAIN_PROBABILITY_TRIGGER_PCT: f64 = 50.0;

/// Default number of forecast hours scanned ahead of "now"
pub const DEFAULT_LOOKAHEAD_HOURS: usize = 3;

/// Fallback temperature when the forecast hour has no reading (°C)
pub const DEFAULT_WINDOW_TEMPERATURE_CELSIUS: f64 = 25.0;

/// Fallback humidity when the forecast hour has no reading (%)
pub const DEFAULT_WINDOW_HUMIDITY_PERCENT: f64 = 70.0;

/// Aligned hourly forecast arrays for one location.
///
/// All value vectors share the index space of `time`; providers report gaps
/// as `None`, which the scan treats as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct HourlySeries {
    pub time: Vec<DateTime<Utc>>,
    #[serde(default)]
    pub precipitation_mm: Vec<Option<f64>>,
    #[serde(default)]
    pub precipitation_probability: Vec<Option<f64>>,
    #[serde(default)]
    pub temperature_celsius: Vec<Option<f64>>,
    #[serde(default)]
    pub humidity_percent: Vec<Option<f64>>,
}

impl HourlySeries {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Precipitation at an index, missing entries as 0
    pub fn precipitation_at(&self, index: usize) -> f64 {
        self.precipitation_mm
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(0.0)
    }

    /// Precipitation probability at an index, missing entries as 0
    pub fn probability_at(&self, index: usize) -> f64 {
        self.precipitation_probability
            .get(index)
            .copied()
            .flatten()
            .unwrap_or(0.0)
    }

    pub fn temperature_at(&self, index: usize) -> Option<f64> {
        self.temperature_celsius.get(index).copied().flatten()
    }

    pub fn humidity_at(&self, index: usize) -> Option<f64> {
        self.humidity_percent.get(index).copied().flatten()
    }
}

/// Result of scanning a forecast window for rain risk
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainRiskSummary {
    /// First scanned index meeting a trigger condition; `None` when no hour
    /// in the window qualifies
    pub earliest_likely_index: Option<usize>,
    pub peak_probability: f64,
    pub peak_precipitation_mm: f64,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
}

impl RainRiskSummary {
    pub fn rain_expected(&self) -> bool {
        self.earliest_likely_index.is_some()
    }

    /// Human-readable one-liner for the presentation layer
    pub fn headline(&self, series: &HourlySeries) -> String {
        match self.earliest_likely_index.and_then(|i| series.time.get(i)) {
            Some(t) => format!("Rain likely around {}", t.format("%-H:%M")),
            None => "No likely rain in the next few hours.".to_string(),
        }
    }
}

/// Index of the first timestamp at or after `now`, clamped to the last index
/// when the whole series is in the past. Yields 0 for an empty series.
pub fn start_index(series: &HourlySeries, now: DateTime<Utc>) -> usize {
    series
        .time
        .iter()
        .position(|t| *t >= now)
        .unwrap_or_else(|| series.len().saturating_sub(1))
}

/// Scan the forecast window starting at `now` for near-term rain risk.
///
/// Pure: the caller supplies `now`, nothing reads the wall clock. Returns
/// `None` for a series with no timestamps (the "no data available" case).
///
/// The scan runs from the first hour at or after `now` through
/// `lookahead_hours` further entries (inclusive, clamped to the series end).
/// It tracks the running maxima of precipitation and probability over that
/// window and records the first hour where precipitation reaches
/// [`RAIN_PRECIP_TRIGGER_MM`] or probability reaches
/// [`RAIN_PROBABILITY_TRIGGER_PCT`]. First match wins; the scan still
/// finishes so the peaks cover the whole window.
pub fn analyze_rain_risk(
    series: &HourlySeries,
    now: DateTime<Utc>,
    lookahead_hours: usize,
) -> Option<RainRiskSummary> {
    if series.is_empty() {
        return None;
    }

    let start = start_index(series, now);
    let end = (start + lookahead_hours).min(series.len() - 1);

    let mut earliest_likely_index = None;
    let mut peak_probability = 0.0;
    let mut peak_precipitation_mm = 0.0;

    for i in start..=end {
        let mm = series.precipitation_at(i);
        let prob = series.probability_at(i);
        if mm > peak_precipitation_mm {
            peak_precipitation_mm = mm;
        }
        if prob > peak_probability {
            peak_probability = prob;
        }
        if earliest_likely_index.is_none()
            && (mm >= RAIN_PRECIP_TRIGGER_MM || prob >= RAIN_PROBABILITY_TRIGGER_PCT)
        {
            earliest_likely_index = Some(i);
        }
    }

    Some(RainRiskSummary {
        earliest_likely_index,
        peak_probability,
        peak_precipitation_mm,
        window_start: series.time[start],
        window_end: series.time[end],
    })
}

/// Total precipitation over `lookahead_hours` entries from the hour at or
/// after `now`, exclusive of the end and clipped to the series bounds.
/// Feeds the contamination-probability payload.
pub fn rainfall_total(series: &HourlySeries, now: DateTime<Utc>, lookahead_hours: usize) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let start = start_index(series, now);
    let end = (start + lookahead_hours).min(series.len());
    (start..end).map(|i| series.precipitation_at(i)).sum()
}

/// Conditions over the scan window, rounded the way the remote
/// contamination-probability service expects them
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindowConditions {
    /// Rainfall total over the window, one decimal place (mm)
    pub rainfall_mm: f64,
    /// Temperature at the window start, one decimal place (°C)
    pub temperature_celsius: f64,
    /// Humidity at the window start, whole percent
    pub humidity_percent: i32,
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Derive the rounded window conditions at `now`. Hours without a
/// temperature or humidity reading fall back to the fixed defaults, and an
/// empty series yields the defaults with zero rainfall.
pub fn window_conditions(
    series: &HourlySeries,
    now: DateTime<Utc>,
    lookahead_hours: usize,
) -> WindowConditions {
    let start = start_index(series, now);
    let temperature = series
        .temperature_at(start)
        .unwrap_or(DEFAULT_WINDOW_TEMPERATURE_CELSIUS);
    let humidity = series
        .humidity_at(start)
        .unwrap_or(DEFAULT_WINDOW_HUMIDITY_PERCENT);

    WindowConditions {
        rainfall_mm: round_to_tenth(rainfall_total(series, now, lookahead_hours)),
        temperature_celsius: round_to_tenth(temperature),
        humidity_percent: humidity.round() as i32,
    }
}
