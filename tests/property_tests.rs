//! Property-based tests for AQI conversion and forecasting.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated concentrations and series.

use airguard::aqi::{classify, compute_aqi, AqiCategory};
use airguard::error::AirGuardError;
use airguard::forecaster::{ForecastModel, SequenceForecaster};
use proptest::prelude::*;

/// Strategy for generating hourly concentration series.
/// Adds small variation to avoid all-constant series.
fn series_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| {
        prop::collection::vec(5.0..120.0_f64, len).prop_map(|mut v| {
            for (i, val) in v.iter_mut().enumerate() {
                *val += (i as f64) * 0.001;
            }
            v
        })
    })
}

// =============================================================================
// Property: AQI is monotonically non-decreasing in concentration
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn aqi_is_monotonic(a in 0.0..600.0_f64, b in 0.0..600.0_f64) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(compute_aqi(lo).unwrap() <= compute_aqi(hi).unwrap());
    }

    #[test]
    fn aqi_of_small_steps_is_monotonic(start in 0.0..300.0_f64) {
        let mut previous = compute_aqi(start).unwrap();
        for i in 1..=50 {
            let current = compute_aqi(start + i as f64 * 0.01).unwrap();
            prop_assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn negative_concentrations_are_invalid(pm25 in -1000.0..-1e-9_f64) {
        prop_assert!(matches!(compute_aqi(pm25), Err(AirGuardError::InvalidInput(_))));
    }

    #[test]
    fn category_matches_thresholds(pm25 in 0.0..500.0_f64) {
        let aqi = compute_aqi(pm25).unwrap();
        let expected = if aqi <= 50 {
            AqiCategory::Good
        } else if aqi <= 100 {
            AqiCategory::Moderate
        } else {
            AqiCategory::Unhealthy
        };
        prop_assert_eq!(classify(aqi), expected);
    }
}

// =============================================================================
// Property: training preconditions and forecast shape
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn short_series_never_trains(window in 1usize..48, shortfall in 0usize..48) {
        let len = window.saturating_sub(shortfall);
        let series: Vec<f64> = (0..len).map(|i| 20.0 + i as f64).collect();
        let mut forecaster = SequenceForecaster::new();

        let result = forecaster.train(&series, window);
        prop_assert!(
            matches!(result, Err(AirGuardError::InsufficientData { .. })),
            "expected InsufficientData error"
        );
        prop_assert!(!forecaster.is_trained());
    }

    #[test]
    fn forecast_length_matches_horizon(
        values in series_strategy(40, 120),
        window in 1usize..12,
        horizon in 0usize..30
    ) {
        let model = ForecastModel::fit(&values, window).unwrap();
        let forecast = model.forecast(&values, horizon).unwrap();
        prop_assert_eq!(forecast.len(), horizon);
        prop_assert!(forecast.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn training_report_is_consistent(values in series_strategy(30, 100), window in 1usize..8) {
        let model = ForecastModel::fit(&values, window).unwrap();
        let report = model.report();
        prop_assert_eq!(report.samples, values.len() - window);
        prop_assert!(report.mse >= 0.0);
        prop_assert!(report.mae >= 0.0);
        // MAE never exceeds RMSE
        prop_assert!(report.mae <= report.rmse + 1e-9);
    }

    #[test]
    fn training_and_forecasting_are_deterministic(
        values in series_strategy(40, 100),
        window in 1usize..10
    ) {
        let first = ForecastModel::fit(&values, window).unwrap();
        let second = ForecastModel::fit(&values, window).unwrap();
        prop_assert_eq!(first.coefficients(), second.coefficients());
        prop_assert_eq!(
            first.forecast(&values, 12).unwrap(),
            second.forecast(&values, 12).unwrap()
        );
    }
}
