//! Sleep model abstraction.
//!
//! The calculator only ever sees the [`SleepModel`] trait: a fixed-shape
//! numeric function from `(wake seconds, desired sleep, coffee)` to an
//! actual-sleep estimate in hours. The shipped implementation is
//! [`LinearModel`], a regression artifact trained elsewhere and bundled as
//! data; [`ConstantModel`] is a deterministic stand-in for tests and dry
//! runs.

mod linear;

pub use linear::{LinearModel, ModelInfo};

use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::inputs::PredictionInput;

/// Output of a sleep model invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SleepPrediction {
    /// Estimated actual sleep, hours.
    pub actual_sleep_hours: f64,
}

/// A pre-trained estimator of actual sleep duration.
///
/// Implementations are treated as black boxes: the caller supplies the
/// feature vector and consumes an hours value, nothing else.
pub trait SleepModel {
    fn predict(&self, input: &PredictionInput) -> Result<SleepPrediction, ModelError>;
}

/// Model stub returning a fixed duration regardless of input.
#[derive(Debug, Clone, Copy)]
pub struct ConstantModel {
    pub actual_sleep_hours: f64,
}

impl ConstantModel {
    pub fn new(actual_sleep_hours: f64) -> Self {
        Self { actual_sleep_hours }
    }
}

impl SleepModel for ConstantModel {
    fn predict(&self, _input: &PredictionInput) -> Result<SleepPrediction, ModelError> {
        Ok(SleepPrediction {
            actual_sleep_hours: self.actual_sleep_hours,
        })
    }
}

/// Model stub that always fails, for exercising the error path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingModel;

impl SleepModel for FailingModel {
    fn predict(&self, _input: &PredictionInput) -> Result<SleepPrediction, ModelError> {
        Err(ModelError::ParseFailed("model unavailable".into()))
    }
}
