//! User input state.
//!
//! [`SleepInputs`] holds the three values the form collects. The setters
//! enforce the documented ranges; the stepper helpers clamp at the bounds
//! instead, the way a UI stepper control does.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::time_of_day::WakeTime;

/// Minimum desired sleep, hours.
pub const SLEEP_AMOUNT_MIN: f64 = 4.0;
/// Maximum desired sleep, hours.
pub const SLEEP_AMOUNT_MAX: f64 = 12.0;
/// Stepper increment for desired sleep, hours.
pub const SLEEP_AMOUNT_STEP: f64 = 0.25;
/// Maximum daily coffee intake, cups.
pub const COFFEE_CUPS_MAX: u8 = 20;

fn default_sleep_amount() -> f64 {
    8.0
}

/// The three user-selected values feeding the bedtime calculator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SleepInputs {
    /// Desired wake time.
    #[serde(default)]
    pub wake: WakeTime,
    /// Desired hours of sleep, within [4.0, 12.0].
    #[serde(default = "default_sleep_amount")]
    pub sleep_amount: f64,
    /// Daily cups of coffee, within [0, 20].
    #[serde(default)]
    pub coffee_cups: u8,
}

impl Default for SleepInputs {
    fn default() -> Self {
        Self {
            wake: WakeTime::default_wake(),
            sleep_amount: default_sleep_amount(),
            coffee_cups: 0,
        }
    }
}

impl SleepInputs {
    /// Build inputs from raw values, validating every range.
    pub fn new(wake: WakeTime, sleep_amount: f64, coffee_cups: u8) -> Result<Self, ValidationError> {
        let mut inputs = Self {
            wake,
            ..Self::default()
        };
        inputs.set_sleep_amount(sleep_amount)?;
        inputs.set_coffee_cups(coffee_cups)?;
        Ok(inputs)
    }

    pub fn set_wake(&mut self, wake: WakeTime) {
        self.wake = wake;
    }

    /// Set desired sleep, rejecting values outside [4.0, 12.0].
    ///
    /// The exact boundary values are accepted.
    pub fn set_sleep_amount(&mut self, hours: f64) -> Result<(), ValidationError> {
        if !hours.is_finite() || !(SLEEP_AMOUNT_MIN..=SLEEP_AMOUNT_MAX).contains(&hours) {
            return Err(ValidationError::OutOfRange {
                field: "sleep_amount",
                message: format!(
                    "{hours} is outside [{SLEEP_AMOUNT_MIN}, {SLEEP_AMOUNT_MAX}] hours"
                ),
            });
        }
        self.sleep_amount = hours;
        Ok(())
    }

    /// Set coffee intake, rejecting values above 20 cups.
    pub fn set_coffee_cups(&mut self, cups: u8) -> Result<(), ValidationError> {
        if cups > COFFEE_CUPS_MAX {
            return Err(ValidationError::OutOfRange {
                field: "coffee_cups",
                message: format!("{cups} is more than {COFFEE_CUPS_MAX} cups"),
            });
        }
        self.coffee_cups = cups;
        Ok(())
    }

    /// Step desired sleep up by 0.25 h, clamped at 12.0.
    pub fn step_sleep_up(&mut self) {
        self.sleep_amount = (self.sleep_amount + SLEEP_AMOUNT_STEP).min(SLEEP_AMOUNT_MAX);
    }

    /// Step desired sleep down by 0.25 h, clamped at 4.0.
    pub fn step_sleep_down(&mut self) {
        self.sleep_amount = (self.sleep_amount - SLEEP_AMOUNT_STEP).max(SLEEP_AMOUNT_MIN);
    }

    /// Derive the numeric feature vector for the model.
    pub fn to_prediction_input(&self) -> PredictionInput {
        PredictionInput {
            wake_seconds: f64::from(self.wake.seconds_since_midnight()),
            estimated_sleep: self.sleep_amount,
            coffee: f64::from(self.coffee_cups),
        }
    }
}

/// Feature vector handed to the sleep model.
///
/// Derived fresh from [`SleepInputs`] at every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    /// Wake time as seconds since midnight.
    pub wake_seconds: f64,
    /// Desired sleep, hours.
    pub estimated_sleep: f64,
    /// Daily coffee, cups.
    pub coffee: f64,
}
