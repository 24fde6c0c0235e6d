//! Validation utilities for the Water Quality Advisor Platform
//!
//! Boundary checks for orchestration inputs. The advisory scorer itself is
//! deliberately total over raw readings and does not use these.

use rust_decimal::Decimal;

use crate::models::HourlySeries;
use crate::types::GpsCoordinates;

/// Validate coordinates are on the globe
pub fn validate_coordinates(coords: &GpsCoordinates) -> Result<(), &'static str> {
    if coords.latitude < Decimal::from(-90) || coords.latitude > Decimal::from(90) {
        return Err("Latitude must be between -90 and 90");
    }
    if coords.longitude < Decimal::from(-180) || coords.longitude > Decimal::from(180) {
        return Err("Longitude must be between -180 and 180");
    }
    Ok(())
}

/// Validate a rain-scan lookahead window (whole hours, at most two days)
pub fn validate_lookahead_hours(hours: usize) -> Result<(), &'static str> {
    if hours == 0 {
        return Err("Lookahead must be at least 1 hour");
    }
    if hours > 48 {
        return Err("Lookahead must be at most 48 hours");
    }
    Ok(())
}

/// Validate that a forecast series honors its alignment invariant: every
/// value vector matches the timestamp vector in length, and timestamps are
/// non-decreasing
pub fn validate_series_alignment(series: &HourlySeries) -> Result<(), &'static str> {
    let n = series.time.len();
    if series.precipitation_mm.len() != n
        || series.precipitation_probability.len() != n
        || series.temperature_celsius.len() != n
        || series.humidity_percent.len() != n
    {
        return Err("Forecast series arrays must share one length");
    }
    if series.time.windows(2).any(|w| w[0] > w[1]) {
        return Err("Forecast timestamps must be non-decreasing");
    }
    Ok(())
}

/// Check a pH value falls on the measurable scale
pub fn is_measurable_ph(ph: f64) -> bool {
    (0.0..=14.0).contains(&ph)
}

/// Check a probability percentage is well-formed
pub fn is_valid_probability_percent(percent: f64) -> bool {
    (0.0..=100.0).contains(&percent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    fn coords(lat: i64, lon: i64) -> GpsCoordinates {
        GpsCoordinates::new(Decimal::from(lat), Decimal::from(lon))
    }

    #[test]
    fn test_validate_coordinates_valid() {
        assert!(validate_coordinates(&coords(0, 0)).is_ok());
        assert!(validate_coordinates(&coords(90, 180)).is_ok());
        assert!(validate_coordinates(&coords(-90, -180)).is_ok());
    }

    #[test]
    fn test_validate_coordinates_invalid() {
        assert!(validate_coordinates(&coords(91, 0)).is_err());
        assert!(validate_coordinates(&coords(-91, 0)).is_err());
        assert!(validate_coordinates(&coords(0, 181)).is_err());
        assert!(validate_coordinates(&coords(0, -181)).is_err());
    }

    #[test]
    fn test_validate_lookahead_hours() {
        assert!(validate_lookahead_hours(1).is_ok());
        assert!(validate_lookahead_hours(3).is_ok());
        assert!(validate_lookahead_hours(48).is_ok());
        assert!(validate_lookahead_hours(0).is_err());
        assert!(validate_lookahead_hours(49).is_err());
    }

    #[test]
    fn test_validate_series_alignment_valid() {
        let series = HourlySeries {
            time: vec![
                Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap(),
            ],
            precipitation_mm: vec![Some(0.0), None],
            precipitation_probability: vec![Some(10.0), Some(20.0)],
            temperature_celsius: vec![Some(25.0), Some(26.0)],
            humidity_percent: vec![Some(70.0), Some(72.0)],
        };
        assert!(validate_series_alignment(&series).is_ok());
    }

    #[test]
    fn test_validate_series_alignment_ragged() {
        let series = HourlySeries {
            time: vec![
                Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap(),
            ],
            precipitation_mm: vec![Some(0.0)],
            precipitation_probability: vec![Some(10.0), Some(20.0)],
            temperature_celsius: vec![Some(25.0), Some(26.0)],
            humidity_percent: vec![Some(70.0), Some(72.0)],
        };
        assert!(validate_series_alignment(&series).is_err());
    }

    #[test]
    fn test_validate_series_alignment_unordered_time() {
        let series = HourlySeries {
            time: vec![
                Utc.with_ymd_and_hms(2024, 6, 1, 2, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2024, 6, 1, 1, 0, 0).unwrap(),
            ],
            precipitation_mm: vec![None, None],
            precipitation_probability: vec![None, None],
            temperature_celsius: vec![None, None],
            humidity_percent: vec![None, None],
        };
        assert!(validate_series_alignment(&series).is_err());
    }

    #[test]
    fn test_measurable_ph() {
        assert!(is_measurable_ph(0.0));
        assert!(is_measurable_ph(7.0));
        assert!(is_measurable_ph(14.0));
        assert!(!is_measurable_ph(-0.1));
        assert!(!is_measurable_ph(14.1));
        assert!(!is_measurable_ph(f64::NAN));
    }

    proptest! {
        #[test]
        fn prop_probability_percent_bounds(p in -50.0f64..150.0) {
            prop_assert_eq!(is_valid_probability_percent(p), (0.0..=100.0).contains(&p));
        }

        #[test]
        fn prop_on_globe_coordinates_accepted(lat in -90i64..=90, lon in -180i64..=180) {
            prop_assert!(validate_coordinates(&coords(lat, lon)).is_ok());
        }
    }
}
