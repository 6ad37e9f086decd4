use crate::{AppointmentStatus, BoardColumn, ClockTime};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A booking of one or more services with a professional.
///
/// `date` is a civil calendar date in the salon's local time and is never
/// converted through UTC. End time and total amount are not stored; they are
/// recomputed from the resolved services (see [`crate::Catalog::resolve`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub client_id: Uuid,
    pub professional_id: Uuid,
    pub service_ids: Vec<Uuid>,

    pub date: NaiveDate,
    pub start_time: ClockTime,

    pub status: AppointmentStatus,
    pub notes: Option<String>,
    /// Pins the card to a lane other than the status default.
    pub board_column_override: Option<BoardColumn>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Appointment {
    pub fn new(
        client_id: Uuid,
        professional_id: Uuid,
        service_ids: Vec<Uuid>,
        date: NaiveDate,
        start_time: ClockTime,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            client_id,
            professional_id,
            service_ids,
            date,
            start_time,
            status: AppointmentStatus::Agendado,
            notes: None,
            board_column_override: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Column the card is shown in: the override when present, else the
    /// status default.
    pub fn board_column(&self) -> BoardColumn {
        self.board_column_override
            .unwrap_or_else(|| self.status.default_column())
    }
}
