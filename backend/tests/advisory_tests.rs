//! Tests for the rule-based water quality advisory
//!
//! Verifies the fixed threshold table, score-to-label mapping, advisory
//! ordering, and the extended WHO contaminant panel.

use proptest::prelude::*;
use shared::{
    assess_panel, evaluate_reading, AdviceStatus, ContaminantPanel, OverallStatus, Parameter,
    ParameterStatus, QualityLabel, WaterReading,
};

fn reading(ph: f64, tds: f64, turbidity: f64, temperature: f64) -> WaterReading {
    WaterReading {
        ph,
        tds_ppm: tds,
        turbidity_ntu: turbidity,
        temperature_celsius: temperature,
    }
}

// =============================================================================
// Quality Scorer
// =============================================================================

mod quality_scorer {
    use super::*;

    #[test]
    fn all_optimal_reading_is_good() {
        let report = evaluate_reading(&reading(7.0, 100.0, 1.0, 25.0));
        assert_eq!(report.label, QualityLabel::Good);
        assert_eq!(report.score, 0);
        assert_eq!(report.optimal_count(), 4);
    }

    #[test]
    fn severe_reading_is_poor() {
        // 2 (acidic) + 3 (TDS over 500) + 3 (turbidity over 5) + 1 (hot) = 9
        let report = evaluate_reading(&reading(5.0, 600.0, 6.0, 35.0));
        assert_eq!(report.score, 9);
        assert_eq!(report.label, QualityLabel::Poor);
        assert_eq!(report.needs_attention_count(), 4);
    }

    #[test]
    fn moderate_reading_is_fair() {
        // 0 + 2 (TDS over 300) + 1 (turbidity over 1) + 0 = 3
        let report = evaluate_reading(&reading(7.0, 320.0, 2.0, 20.0));
        assert_eq!(report.score, 3);
        assert_eq!(report.label, QualityLabel::Fair);
    }

    #[test]
    fn alkaline_reading_scores_two() {
        let report = evaluate_reading(&reading(9.0, 100.0, 0.5, 20.0));
        assert_eq!(report.score, 2);
        assert_eq!(report.label, QualityLabel::Good);
        assert_eq!(report.advice[0].status, AdviceStatus::NeedsAttention);
    }

    #[test]
    fn boundary_values_stay_optimal() {
        // The thresholds are strict comparisons; the cut points themselves
        // are still in the optimal band
        let low_edges = evaluate_reading(&reading(6.5, 50.0, 1.0, 10.0));
        assert_eq!(low_edges.score, 0);
        assert_eq!(low_edges.label, QualityLabel::Good);

        let high_edges = evaluate_reading(&reading(8.5, 300.0, 1.0, 30.0));
        assert_eq!(high_edges.score, 0);
        assert_eq!(high_edges.label, QualityLabel::Good);
    }

    #[test]
    fn tds_just_over_five_hundred_scores_three() {
        let report = evaluate_reading(&reading(7.0, 500.1, 0.5, 20.0));
        assert_eq!(report.score, 3);
    }

    #[test]
    fn cold_temperature_flagged_without_score() {
        let report = evaluate_reading(&reading(7.0, 100.0, 0.5, 5.0));
        assert_eq!(report.score, 0);
        assert_eq!(report.label, QualityLabel::Good);
        assert_eq!(report.advice[3].status, AdviceStatus::NeedsAttention);
        assert_eq!(report.needs_attention_count(), 1);
    }

    #[test]
    fn label_cutoffs() {
        assert_eq!(QualityLabel::from_score(0), QualityLabel::Good);
        assert_eq!(QualityLabel::from_score(2), QualityLabel::Good);
        assert_eq!(QualityLabel::from_score(3), QualityLabel::Fair);
        assert_eq!(QualityLabel::from_score(5), QualityLabel::Fair);
        assert_eq!(QualityLabel::from_score(6), QualityLabel::Poor);
        assert_eq!(QualityLabel::from_score(9), QualityLabel::Poor);
    }

    #[test]
    fn label_strings_are_stable() {
        // Presentation styling keys off these exact strings
        assert_eq!(QualityLabel::Good.to_string(), "Good");
        assert_eq!(QualityLabel::Fair.to_string(), "Fair");
        assert_eq!(QualityLabel::Poor.to_string(), "Poor");
    }

    #[test]
    fn nan_reading_is_total() {
        let report = evaluate_reading(&reading(f64::NAN, f64::NAN, f64::NAN, f64::NAN));
        assert_eq!(report.advice.len(), 4);
        assert_eq!(report.score, 0);
        assert_eq!(report.label, QualityLabel::Good);
    }

    #[test]
    fn negative_tds_reads_as_mineral_poor() {
        let report = evaluate_reading(&reading(7.0, -5.0, 0.0, 20.0));
        assert_eq!(report.score, 1);
        assert_eq!(report.advice[1].status, AdviceStatus::NeedsAttention);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let input = reading(6.2, 420.0, 3.3, 31.0);
        assert_eq!(evaluate_reading(&input), evaluate_reading(&input));
    }
}

// =============================================================================
// Extended contaminant panel
// =============================================================================

mod contaminant_panel {
    use super::*;

    fn clean_panel() -> ContaminantPanel {
        ContaminantPanel {
            ph: 7.0,
            tds_ppm: 150.0,
            turbidity_ntu: 0.8,
            temperature_celsius: 22.0,
            lead_mg_l: 0.005,
            arsenic_mg_l: 0.005,
            nitrates_mg_l: 5.0,
            fluoride_mg_l: 0.7,
            bacteria_cfu: 0.0,
        }
    }

    #[test]
    fn clean_panel_is_excellent() {
        let report = assess_panel(&clean_panel());
        assert_eq!(report.overall, OverallStatus::Excellent);
        assert_eq!(report.assessments.len(), 9);
        assert!(report
            .assessments
            .iter()
            .all(|a| a.status == ParameterStatus::Safe));
    }

    #[test]
    fn bacteria_alone_is_critical() {
        let mut panel = clean_panel();
        panel.bacteria_cfu = 10.0;
        let report = assess_panel(&panel);
        assert_eq!(report.overall, OverallStatus::Critical);
        assert_eq!(report.assessments[8].status, ParameterStatus::Danger);
    }

    #[test]
    fn lead_over_guideline_is_critical() {
        let mut panel = clean_panel();
        panel.lead_mg_l = 0.02;
        assert_eq!(assess_panel(&panel).overall, OverallStatus::Critical);
    }

    #[test]
    fn single_benign_violation_is_fair() {
        let mut panel = clean_panel();
        panel.fluoride_mg_l = 2.0;
        let report = assess_panel(&panel);
        assert_eq!(report.overall, OverallStatus::Fair);
        assert_eq!(report.assessments[7].status, ParameterStatus::Unsafe);
    }

    #[test]
    fn three_benign_violations_are_poor() {
        let mut panel = clean_panel();
        panel.tds_ppm = 600.0;
        panel.fluoride_mg_l = 2.0;
        panel.nitrates_mg_l = 60.0;
        assert_eq!(assess_panel(&panel).overall, OverallStatus::Poor);
    }

    #[test]
    fn acidic_ph_is_unsafe_but_fair_overall() {
        let mut panel = clean_panel();
        panel.ph = 5.0;
        let report = assess_panel(&panel);
        assert_eq!(report.overall, OverallStatus::Fair);
        assert_eq!(report.assessments[0].status, ParameterStatus::Unsafe);
    }

    #[test]
    fn cold_water_is_not_a_panel_violation() {
        // The temperature minimum is advisory; the panel only treats the
        // maximum as a safety bound
        let mut panel = clean_panel();
        panel.temperature_celsius = 5.0;
        assert_eq!(assess_panel(&panel).overall, OverallStatus::Excellent);
    }

    #[test]
    fn guideline_limit_itself_is_safe() {
        let mut panel = clean_panel();
        panel.tds_ppm = 500.0;
        panel.nitrates_mg_l = 50.0;
        panel.fluoride_mg_l = 1.5;
        assert_eq!(assess_panel(&panel).overall, OverallStatus::Excellent);
    }
}

// =============================================================================
// Property tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Inside the optimal rectangle every parameter reads optimal and the
    /// label is Good
    #[test]
    fn prop_optimal_rectangle_is_good(
        ph in 6.5f64..=8.5,
        tds in 50.0f64..=300.0,
        turbidity in 0.0f64..=1.0,
        temperature in 10.0f64..=30.0
    ) {
        let report = evaluate_reading(&reading(ph, tds, turbidity, temperature));
        prop_assert_eq!(report.label, QualityLabel::Good);
        prop_assert_eq!(report.score, 0);
        prop_assert_eq!(report.optimal_count(), 4);
    }

    /// The score stays within its 9-point range and always agrees with the
    /// label mapping
    #[test]
    fn prop_score_bounds_and_label(
        ph in 0.0f64..=14.0,
        tds in 0.0f64..=2000.0,
        turbidity in 0.0f64..=20.0,
        temperature in -10.0f64..=60.0
    ) {
        let report = evaluate_reading(&reading(ph, tds, turbidity, temperature));
        prop_assert!(report.score >= 0 && report.score <= 9);
        prop_assert_eq!(report.label, QualityLabel::from_score(report.score));
        prop_assert_eq!(report.advice.len(), 4);
    }

    /// Advisory order never changes, whatever triggers
    #[test]
    fn prop_advice_order_fixed(
        ph in 0.0f64..=14.0,
        tds in 0.0f64..=2000.0,
        turbidity in 0.0f64..=20.0,
        temperature in -10.0f64..=60.0
    ) {
        let report = evaluate_reading(&reading(ph, tds, turbidity, temperature));
        let order: Vec<Parameter> = report.advice.iter().map(|a| a.parameter).collect();
        prop_assert_eq!(
            order,
            vec![
                Parameter::Ph,
                Parameter::Tds,
                Parameter::Turbidity,
                Parameter::Temperature
            ]
        );
    }

    /// Identical inputs yield identical reports
    #[test]
    fn prop_evaluation_idempotent(
        ph in 0.0f64..=14.0,
        tds in 0.0f64..=2000.0,
        turbidity in 0.0f64..=20.0,
        temperature in -10.0f64..=60.0
    ) {
        let input = reading(ph, tds, turbidity, temperature);
        prop_assert_eq!(evaluate_reading(&input), evaluate_reading(&input));
    }
}
