use crate::{ConfigError, ConfigErrorResult, DEFAULT_CLOSING_TIME, DEFAULT_OPENING_TIME};

use std::str::FromStr;

use salon_core::ClockTime;
use serde::Deserialize;

/// Business hours used when validating bookings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// `HH:MM`
    pub opening_time: String,
    /// `HH:MM`; a booking must end at or before this time
    pub closing_time: String,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            opening_time: String::from(DEFAULT_OPENING_TIME),
            closing_time: String::from(DEFAULT_CLOSING_TIME),
        }
    }
}

impl ScheduleConfig {
    pub fn opening(&self) -> ConfigErrorResult<ClockTime> {
        Self::parse_time("schedule.opening_time", &self.opening_time)
    }

    pub fn closing(&self) -> ConfigErrorResult<ClockTime> {
        Self::parse_time("schedule.closing_time", &self.closing_time)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        let opening = self.opening()?;
        let closing = self.closing()?;

        if opening >= closing {
            return Err(ConfigError::schedule(format!(
                "schedule.opening_time ({}) must be before schedule.closing_time ({})",
                opening, closing
            )));
        }

        Ok(())
    }

    #[track_caller]
    fn parse_time(key: &str, value: &str) -> ConfigErrorResult<ClockTime> {
        ClockTime::from_str(value).map_err(|_| {
            ConfigError::schedule(format!("{} must be HH:MM, got '{}'", key, value))
        })
    }
}
