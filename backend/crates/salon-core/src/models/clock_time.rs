use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Wall-clock time of day with minute precision, written `HH:MM`.
///
/// Ordering compares minutes since midnight, so `9:00` sorts before `10:00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    #[track_caller]
    pub fn new(hour: u32, minute: u32) -> CoreResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(CoreError::InvalidClockTime {
                value: format!("{hour}:{minute:02}"),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }

    /// Minutes since midnight.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn hour(&self) -> u32 {
        self.minutes / 60
    }

    pub fn minute(&self) -> u32 {
        self.minutes % 60
    }

    /// Time `duration` minutes later, clamped to 23:59 so an end time never
    /// wraps into the next day.
    pub fn add_minutes(&self, duration: u32) -> Self {
        Self {
            minutes: self.minutes.saturating_add(duration).min(MINUTES_PER_DAY - 1),
        }
    }
}

impl FromStr for ClockTime {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let invalid = || CoreError::InvalidClockTime {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        };

        let (hour, minute) = s.trim().split_once(':').ok_or_else(invalid)?;
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(invalid());
        }
        let hour: u32 = hour.parse().map_err(|_| invalid())?;
        let minute: u32 = minute.parse().map_err(|_| invalid())?;
        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Ok(Self {
            minutes: hour * 60 + minute,
        })
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::from_str(&s).map_err(serde::de::Error::custom)
    }
}
