//! Time-of-day value types.
//!
//! [`WakeTime`] is a bare hour/minute pair -- the date component of the
//! original picker value never mattered, only the clock position does.
//! [`Bedtime`] is the calculator's output: a clock position plus a flag for
//! whether the recommendation lands on the previous day.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// A user-selected time of day, minute granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WakeTime {
    /// Hour of day (0-23)
    pub hour: u8,
    /// Minute (0-59)
    pub minute: u8,
}

impl WakeTime {
    /// Create a wake time, rejecting out-of-clock components.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ValidationError> {
        if hour > 23 {
            return Err(ValidationError::OutOfRange {
                field: "wake_time.hour",
                message: format!("{hour} is not a valid hour (0-23)"),
            });
        }
        if minute > 59 {
            return Err(ValidationError::OutOfRange {
                field: "wake_time.minute",
                message: format!("{minute} is not a valid minute (0-59)"),
            });
        }
        Ok(Self { hour, minute })
    }

    /// The default wake time, 07:00.
    ///
    /// Computed on demand; there is no cached singleton.
    pub fn default_wake() -> Self {
        Self { hour: 7, minute: 0 }
    }

    /// Parse from an `HH:MM` string.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let time = NaiveTime::parse_from_str(input, "%H:%M").map_err(|_| {
            ValidationError::InvalidTimeOfDay {
                input: input.to_string(),
            }
        })?;
        Ok(Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
        })
    }

    /// Total seconds since midnight: `hour * 3600 + minute * 60`.
    pub fn seconds_since_midnight(&self) -> u32 {
        u32::from(self.hour) * 3600 + u32::from(self.minute) * 60
    }

    /// Reconstruct from seconds since midnight.
    ///
    /// Seconds beyond a full day wrap around; sub-minute remainders are
    /// discarded, so this is the exact inverse of
    /// [`seconds_since_midnight`](Self::seconds_since_midnight).
    pub fn from_seconds_since_midnight(seconds: u32) -> Self {
        let seconds = seconds % SECONDS_PER_DAY as u32;
        Self {
            hour: (seconds / 3600) as u8,
            minute: (seconds % 3600 / 60) as u8,
        }
    }

    /// Subtract a duration in whole seconds, yielding a bedtime.
    ///
    /// Crossing midnight flags the result as belonging to the previous day.
    /// The flag only distinguishes one day back; callers must keep the
    /// duration under 24 h (the calculator rejects model predictions of a
    /// day or more).
    pub fn minus_seconds(&self, seconds: i64) -> Bedtime {
        let at = i64::from(self.seconds_since_midnight()) - seconds;
        let previous_day = at < 0;
        let at = at.rem_euclid(SECONDS_PER_DAY);
        Bedtime {
            time: WakeTime::from_seconds_since_midnight(at as u32),
            previous_day,
        }
    }

    fn as_naive(&self) -> NaiveTime {
        // Components are validated on construction.
        NaiveTime::from_hms_opt(u32::from(self.hour), u32::from(self.minute), 0)
            .unwrap_or_default()
    }

    /// Format as `HH:MM` or `h:MM AM/PM`.
    pub fn format(&self, use_24h: bool) -> String {
        if use_24h {
            format!("{:02}:{:02}", self.hour, self.minute)
        } else {
            self.as_naive().format("%-I:%M %p").to_string()
        }
    }
}

impl Default for WakeTime {
    fn default() -> Self {
        Self::default_wake()
    }
}

impl std::fmt::Display for WakeTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// A recommended bedtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bedtime {
    /// Clock position of the recommendation.
    pub time: WakeTime,
    /// True when the bedtime falls before midnight of the wake day. Only a
    /// single day back is representable; durations are bounded below 24 h
    /// upstream.
    pub previous_day: bool,
}

impl Bedtime {
    /// Format as a clock time, e.g. `23:30` or `11:30 PM`.
    pub fn format(&self, use_24h: bool) -> String {
        self.time.format(use_24h)
    }
}

impl std::fmt::Display for Bedtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.previous_day {
            write!(f, "{} (previous day)", self.time)
        } else {
            write!(f, "{}", self.time)
        }
    }
}
