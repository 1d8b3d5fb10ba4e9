//! Linear regression artifact.
//!
//! The artifact is a small JSON document produced by an offline training
//! run: one coefficient per feature, an intercept, and enough metadata to
//! refuse artifacts this library was not built for. A copy is bundled into
//! the binary; a different artifact can be loaded from disk.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{SleepModel, SleepPrediction};
use crate::error::ModelError;
use crate::inputs::PredictionInput;

/// Artifact schema version this library understands.
const SCHEMA_VERSION: u32 = 1;

/// Output unit the calculator consumes.
const OUTPUT_UNIT: &str = "hours";

const BUNDLED_ARTIFACT: &str = include_str!("../../assets/sleep_model.json");

/// Per-feature regression coefficients.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Coefficients {
    wake_seconds: f64,
    estimated_sleep: f64,
    coffee: f64,
}

/// A pre-trained linear regression over the three form inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    schema_version: u32,
    name: String,
    /// Unit of the predicted duration. Checked at load time so an artifact
    /// trained to emit seconds cannot silently produce nonsense bedtimes.
    output_unit: String,
    trained_at: String,
    samples: u64,
    coefficients: Coefficients,
    intercept: f64,
}

/// Artifact metadata, for display without predicting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    pub schema_version: u32,
    pub output_unit: String,
    pub trained_at: String,
    pub samples: u64,
}

impl LinearModel {
    /// Load the artifact bundled with the library.
    ///
    /// Parsed fresh on every call; the calculator constructs its model per
    /// invocation and nothing is cached.
    pub fn bundled() -> Result<Self, ModelError> {
        Self::from_json(BUNDLED_ARTIFACT)
    }

    /// Load an artifact from a JSON file on disk.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let content = std::fs::read_to_string(path).map_err(|source| ModelError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse an artifact from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self =
            serde_json::from_str(json).map_err(|e| ModelError::ParseFailed(e.to_string()))?;
        if model.schema_version != SCHEMA_VERSION {
            return Err(ModelError::UnsupportedVersion {
                found: model.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        if model.output_unit != OUTPUT_UNIT {
            return Err(ModelError::UnsupportedUnit(model.output_unit));
        }
        Ok(model)
    }

    /// Artifact metadata.
    pub fn info(&self) -> ModelInfo {
        ModelInfo {
            name: self.name.clone(),
            schema_version: self.schema_version,
            output_unit: self.output_unit.clone(),
            trained_at: self.trained_at.clone(),
            samples: self.samples,
        }
    }
}

impl SleepModel for LinearModel {
    fn predict(&self, input: &PredictionInput) -> Result<SleepPrediction, ModelError> {
        for (feature, value) in [
            ("wake_seconds", input.wake_seconds),
            ("estimated_sleep", input.estimated_sleep),
            ("coffee", input.coffee),
        ] {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteInput { feature });
            }
        }

        let hours = self.intercept
            + self.coefficients.wake_seconds * input.wake_seconds
            + self.coefficients.estimated_sleep * input.estimated_sleep
            + self.coefficients.coffee * input.coffee;

        if !hours.is_finite() || hours <= 0.0 {
            return Err(ModelError::InvalidPrediction { value: hours });
        }

        Ok(SleepPrediction {
            actual_sleep_hours: hours,
        })
    }
}
