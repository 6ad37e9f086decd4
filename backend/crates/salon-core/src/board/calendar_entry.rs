use crate::{AppointmentStatus, ClockTime};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub appointment_id: Uuid,
    pub professional_id: Uuid,
    /// "<client> - <services>"
    pub title: String,
    pub status: AppointmentStatus,
    pub date: NaiveDate,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl CalendarEntry {
    /// Local (naive) start timestamp for calendar grids.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date
            .and_hms_opt(self.start.hour(), self.start.minute(), 0)
            .unwrap_or_else(|| self.date.and_time(chrono::NaiveTime::MIN))
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.date
            .and_hms_opt(self.end.hour(), self.end.minute(), 0)
            .unwrap_or_else(|| self.date.and_time(chrono::NaiveTime::MIN))
    }
}
