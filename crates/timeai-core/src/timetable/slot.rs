use std::fmt;

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

const TIME_FORMAT: &str = "%H:%M";

/// Parse a wall-clock `HH:MM` value.
///
/// Only the format is checked. Two-digit hours and minutes are required so
/// that rendered times line up in the report.
pub fn parse_hhmm(value: &str) -> Result<NaiveTime, ValidationError> {
    let well_formed = value.len() == 5 && value.as_bytes()[2] == b':';
    if !well_formed {
        return Err(ValidationError::InvalidTime {
            value: value.to_string(),
        });
    }
    NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|_| ValidationError::InvalidTime {
        value: value.to_string(),
    })
}

/// A single `(start, end, activity)` entry in a daily timetable.
///
/// Start is not required to precede end, and neighbouring slots are not
/// checked for overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "hhmm")]
    start: NaiveTime,
    #[serde(with = "hhmm")]
    end: NaiveTime,
    activity: String,
}

impl TimeSlot {
    /// Build a slot from `HH:MM` strings.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTime`] if either bound is not a
    /// valid 24-hour time.
    pub fn new(
        start: &str,
        end: &str,
        activity: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            start: parse_hhmm(start)?,
            end: parse_hhmm(end)?,
            activity: activity.into(),
        })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }
}

impl fmt::Display for TimeSlot {
    /// `06:00 - 07:00  Wake up, hydration, light exercise`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}  {}",
            self.start.format(TIME_FORMAT),
            self.end.format(TIME_FORMAT),
            self.activity
        )
    }
}

mod hhmm {
    use super::*;

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(TIME_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_hhmm(&raw).map_err(serde::de::Error::custom)
    }
}
