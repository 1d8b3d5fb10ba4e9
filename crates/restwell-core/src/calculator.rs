//! Bedtime calculation.
//!
//! One pure function: derive the feature vector from the current inputs,
//! ask the model for an actual-sleep estimate, and subtract it from the
//! wake time. No caching -- callers re-invoke on every change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CalculationError, ModelError};
use crate::inputs::SleepInputs;
use crate::model::SleepModel;
use crate::time_of_day::Bedtime;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Compute the recommended bedtime for the given inputs.
///
/// Predicted hours are rounded to the nearest whole second before the
/// subtraction, so the result is stable at minute display granularity.
pub fn calculate_bedtime(
    model: &dyn SleepModel,
    inputs: &SleepInputs,
) -> Result<Bedtime, CalculationError> {
    calculate_report(model, inputs).map(|report| report.bedtime)
}

/// Snapshot of one calculation, for JSON output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BedtimeReport {
    pub inputs: SleepInputs,
    /// Model estimate of actual sleep, hours.
    pub predicted_sleep_hours: f64,
    pub bedtime: Bedtime,
    pub at: DateTime<Utc>,
}

/// Compute a bedtime together with the figures that produced it.
///
/// Predictions outside (0, 24) hours are rejected: a sleep duration of a
/// full day or more has no meaningful clock-time answer, and wrapping it
/// would silently collapse the day offset.
pub fn calculate_report(
    model: &dyn SleepModel,
    inputs: &SleepInputs,
) -> Result<BedtimeReport, CalculationError> {
    let prediction = model.predict(&inputs.to_prediction_input())?;
    let hours = prediction.actual_sleep_hours;
    if !hours.is_finite() || hours <= 0.0 || hours >= 24.0 {
        return Err(ModelError::InvalidPrediction { value: hours }.into());
    }
    let predicted_seconds = (hours * SECONDS_PER_HOUR).round() as i64;
    Ok(BedtimeReport {
        inputs: *inputs,
        predicted_sleep_hours: prediction.actual_sleep_hours,
        bedtime: inputs.wake.minus_seconds(predicted_seconds),
        at: Utc::now(),
    })
}
