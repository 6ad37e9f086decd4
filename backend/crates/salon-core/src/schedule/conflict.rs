//! Advisory double-booking check for the booking dialog.
//!
//! Nothing below the dialog enforces this: the store accepts overlapping
//! appointments, and the check is only as fresh as the loaded snapshot.

use crate::ClockTime;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An existing appointment reduced to the fields that occupy a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub appointment_id: Uuid,
    pub professional_id: Uuid,
    pub date: NaiveDate,
    pub start: ClockTime,
    pub duration_minutes: u32,
}

impl Booking {
    /// Half-open `[start, end)` window in minutes since midnight.
    fn window(&self) -> (u32, u32) {
        let start = self.start.minutes();
        (start, start.saturating_add(self.duration_minutes))
    }
}

/// Booking being composed in the dialog. Every field stays optional until
/// the user picks it; the check is inert while any is missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub professional_id: Option<Uuid>,
    pub date: Option<NaiveDate>,
    pub start: Option<ClockTime>,
    pub duration_minutes: Option<u32>,
    /// Appointment being edited; never compared against itself.
    pub editing: Option<Uuid>,
}

impl Candidate {
    pub fn complete(
        professional_id: Uuid,
        date: NaiveDate,
        start: ClockTime,
        duration_minutes: u32,
    ) -> Self {
        Self {
            professional_id: Some(professional_id),
            date: Some(date),
            start: Some(start),
            duration_minutes: Some(duration_minutes),
            editing: None,
        }
    }

    pub fn editing(mut self, appointment_id: Uuid) -> Self {
        self.editing = Some(appointment_id);
        self
    }
}

/// First existing booking the candidate overlaps, if any.
pub fn find_conflict<'a>(candidate: &Candidate, bookings: &'a [Booking]) -> Option<&'a Booking> {
    let (Some(professional_id), Some(date), Some(start), Some(duration)) = (
        candidate.professional_id,
        candidate.date,
        candidate.start,
        candidate.duration_minutes,
    ) else {
        return None;
    };

    if duration == 0 {
        return None;
    }

    let start = start.minutes();
    let end = start.saturating_add(duration);

    bookings
        .iter()
        .filter(|booking| booking.professional_id == professional_id && booking.date == date)
        .filter(|booking| candidate.editing != Some(booking.appointment_id))
        .find(|booking| {
            let (booked_start, booked_end) = booking.window();
            booked_end > booked_start && start < booked_end && end > booked_start
        })
}

pub fn has_conflict(candidate: &Candidate, bookings: &[Booking]) -> bool {
    find_conflict(candidate, bookings).is_some()
}
