//! Calculator property and scenario tests.
//!
//! The exact-subtraction identity and the conversion round-trip are checked
//! over the full documented input ranges; the concrete scenarios pin the
//! documented example calculations.

use proptest::prelude::*;

use restwell_core::model::FailingModel;
use restwell_core::{
    calculate_bedtime, AppState, ConstantModel, LinearModel, SleepInputs, WakeTime,
};

proptest! {
    /// bedtime = wakeTime - p, exactly, for any deterministic model output p.
    #[test]
    fn bedtime_is_wake_minus_prediction(
        hour in 0u8..24,
        minute in 0u8..60,
        sleep_step in 0u32..=32,
        coffee in 0u8..=20,
        predicted_minutes in 60i64..=960,
    ) {
        let wake = WakeTime::new(hour, minute).unwrap();
        let sleep_amount = 4.0 + f64::from(sleep_step) * 0.25;
        let inputs = SleepInputs::new(wake, sleep_amount, coffee).unwrap();

        let model = ConstantModel::new(predicted_minutes as f64 / 60.0);
        let bedtime = calculate_bedtime(&model, &inputs).unwrap();

        prop_assert_eq!(bedtime, wake.minus_seconds(predicted_minutes * 60));
    }

    /// Converting to seconds-since-midnight and back recovers hour/minute.
    #[test]
    fn seconds_conversion_round_trips(hour in 0u8..24, minute in 0u8..60) {
        let wake = WakeTime::new(hour, minute).unwrap();
        let back = WakeTime::from_seconds_since_midnight(wake.seconds_since_midnight());
        prop_assert_eq!(back, wake);
    }

    /// Every in-range input combination is accepted and predicts cleanly
    /// with the bundled artifact.
    #[test]
    fn bundled_model_accepts_full_input_range(
        hour in 0u8..24,
        minute in 0u8..60,
        sleep_step in 0u32..=32,
        coffee in 0u8..=20,
    ) {
        let wake = WakeTime::new(hour, minute).unwrap();
        let sleep_amount = 4.0 + f64::from(sleep_step) * 0.25;
        let inputs = SleepInputs::new(wake, sleep_amount, coffee).unwrap();

        let model = LinearModel::bundled().unwrap();
        prop_assert!(calculate_bedtime(&model, &inputs).is_ok());
    }
}

#[test]
fn scenario_default_inputs() {
    // 07:00 wake, 8.0 h desired, 0 cups; model predicts 7.5 h.
    let inputs = SleepInputs::default();
    let bedtime = calculate_bedtime(&ConstantModel::new(7.5), &inputs).unwrap();
    assert_eq!(bedtime.time, WakeTime::new(23, 30).unwrap());
    assert!(bedtime.previous_day);
}

#[test]
fn scenario_early_riser() {
    // 06:45 wake, 9.5 h desired, 3 cups; model predicts 8.0 h.
    let inputs = SleepInputs::new(WakeTime::new(6, 45).unwrap(), 9.5, 3).unwrap();
    let bedtime = calculate_bedtime(&ConstantModel::new(8.0), &inputs).unwrap();
    assert_eq!(bedtime.time, WakeTime::new(22, 45).unwrap());
    assert!(bedtime.previous_day);
}

#[test]
fn scenario_model_failure_surfaces_static_strings() {
    let mut state = AppState::new();
    let result = state.recalculate(&FailingModel);

    assert!(result.is_none());
    assert_eq!(state.alert.title, "Error");
    assert_eq!(
        state.alert.message,
        "Sorry, there was a problem calculating your bedtime."
    );
    assert!(state.alert.showing);
}

#[test]
fn artifact_loads_from_disk() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(
        br#"{
            "schema_version": 1,
            "name": "custom",
            "output_unit": "hours",
            "trained_at": "2026-02-02",
            "samples": 100,
            "coefficients": { "wake_seconds": 0.0, "estimated_sleep": 1.0, "coffee": 0.0 },
            "intercept": 0.0
        }"#,
    )
    .unwrap();

    let model = LinearModel::from_path(&path).unwrap();
    let inputs = SleepInputs::default();
    let bedtime = calculate_bedtime(&model, &inputs).unwrap();
    // Identity model: predicted sleep equals desired 8.0 h.
    assert_eq!(bedtime.time, WakeTime::new(23, 0).unwrap());
    assert!(bedtime.previous_day);
}

#[test]
fn missing_artifact_is_a_calculation_failure() {
    let err = LinearModel::from_path(std::path::Path::new("/no/such/model.json"));
    assert!(err.is_err());
}
