use crate::{AppointmentStatus, BoardColumn, ClockTime};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kanban projection of an appointment. Ephemeral: rebuilt on every pass,
/// nothing here is persisted except through the source appointment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCard {
    pub appointment_id: Uuid,
    pub column: BoardColumn,
    /// Position within `column`
    pub order: usize,

    pub status: AppointmentStatus,
    pub client_name: String,
    pub professional_name: String,
    pub service_names: String,

    pub date: NaiveDate,
    pub start: ClockTime,
    pub end: ClockTime,
    pub total_cents: i64,
}
