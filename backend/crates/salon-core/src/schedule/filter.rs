use crate::{Appointment, AppointmentStatus, Client, DateRangePreset, MonthCursor};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

/// Filters shared by the calendar and the board. `date_range` applies to the
/// board only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentFilter {
    /// Empty means every professional
    pub professional_ids: Vec<Uuid>,
    pub status: StatusFilter,
    pub client_search: String,
    pub date_range: Option<DateRangePreset>,
}

impl AppointmentFilter {
    pub fn matches(&self, appointment: &Appointment, client: &Client) -> bool {
        let professional_ok = self.professional_ids.is_empty()
            || self.professional_ids.contains(&appointment.professional_id);

        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => appointment.status == status,
        };

        professional_ok && status_ok && client.name_matches(&self.client_search)
    }

    pub fn matches_board(
        &self,
        appointment: &Appointment,
        client: &Client,
        today: NaiveDate,
        board_month: MonthCursor,
    ) -> bool {
        let in_range = self
            .date_range
            .is_none_or(|range| range.contains(appointment.date, today, board_month));

        in_range && self.matches(appointment, client)
    }
}
