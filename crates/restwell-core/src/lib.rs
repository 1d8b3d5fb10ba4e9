//! # Restwell Core Library
//!
//! Core logic for Restwell, a bedtime recommendation tool. It implements a
//! CLI-first philosophy: everything is available through a standalone CLI
//! binary, with any graphical frontend expected to be a thin layer over the
//! same library.
//!
//! ## Architecture
//!
//! - **Inputs**: a plain state holder for the three form values (wake time,
//!   desired sleep, coffee intake) with validated ranges
//! - **Model**: a narrow trait over a pre-trained sleep estimator, shipped
//!   as a bundled regression artifact
//! - **Calculator**: a pure function from inputs to a recommended bedtime,
//!   re-invoked on every change with no caching
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`SleepInputs`]: validated form state
//! - [`SleepModel`] / [`LinearModel`]: the black-box estimator seam
//! - [`calculate_bedtime`]: the input-to-bedtime pipeline
//! - [`AppState`]: form state plus alert surface for reactive frontends

pub mod calculator;
pub mod error;
pub mod inputs;
pub mod model;
pub mod state;
pub mod storage;
pub mod time_of_day;

pub use calculator::{calculate_bedtime, calculate_report, BedtimeReport};
pub use error::{
    CalculationError, ConfigError, CoreError, ModelError, Result, ValidationError, ERROR_MESSAGE,
    ERROR_TITLE,
};
pub use inputs::{PredictionInput, SleepInputs};
pub use model::{ConstantModel, LinearModel, ModelInfo, SleepModel, SleepPrediction};
pub use state::{AlertState, AppState, CALCULATING_PLACEHOLDER};
pub use storage::Config;
pub use time_of_day::{Bedtime, WakeTime};
