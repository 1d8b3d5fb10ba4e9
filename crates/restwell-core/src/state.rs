//! Application state.
//!
//! [`AppState`] is what a reactive frontend binds to: the current form
//! inputs, the alert surface, and the last successful bedtime. It has no
//! threads and no persistence; the frontend drives it by mutating inputs
//! and calling [`recalculate`](AppState::recalculate) after each change.

use serde::{Deserialize, Serialize};

use crate::calculator::calculate_bedtime;
use crate::error::{ERROR_MESSAGE, ERROR_TITLE};
use crate::inputs::SleepInputs;
use crate::model::SleepModel;
use crate::time_of_day::Bedtime;

/// Placeholder shown while no successful result exists.
pub const CALCULATING_PLACEHOLDER: &str = "Calculating...";

/// Modal alert surface.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertState {
    pub title: String,
    pub message: String,
    pub showing: bool,
}

/// Form state plus derived display state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub inputs: SleepInputs,
    pub alert: AlertState,
    bedtime: Option<Bedtime>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last successfully computed bedtime, if any.
    pub fn bedtime(&self) -> Option<Bedtime> {
        self.bedtime
    }

    /// Recompute the bedtime from the current inputs.
    ///
    /// On failure the static alert strings are set, the alert flag is
    /// raised, and no bedtime is available until a later attempt succeeds.
    pub fn recalculate(&mut self, model: &dyn SleepModel) -> Option<Bedtime> {
        match calculate_bedtime(model, &self.inputs) {
            Ok(bedtime) => {
                self.bedtime = Some(bedtime);
            }
            Err(_) => {
                self.bedtime = None;
                self.alert = AlertState {
                    title: ERROR_TITLE.to_string(),
                    message: ERROR_MESSAGE.to_string(),
                    showing: true,
                };
            }
        }
        self.bedtime
    }

    /// Text for the bedtime display area.
    pub fn display_text(&self, use_24h: bool) -> String {
        match self.bedtime {
            Some(bedtime) => bedtime.format(use_24h),
            None => CALCULATING_PLACEHOLDER.to_string(),
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert.showing = false;
    }
}
