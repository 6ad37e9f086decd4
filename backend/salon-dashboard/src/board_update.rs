use salon_core::{Appointment, AppointmentStatus, BoardCard, BoardColumn};

use uuid::Uuid;

/// One card dropped on a lane. `status` defaults to the lane's own status;
/// bulk edits may set it independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMove {
    pub appointment_id: Uuid,
    pub column: BoardColumn,
    pub status: AppointmentStatus,
}

impl CardMove {
    pub fn new(appointment_id: Uuid, column: BoardColumn) -> Self {
        Self {
            appointment_id,
            column,
            status: column.status(),
        }
    }

    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = status;
        self
    }
}

/// Progress of the latest optimistic board update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BoardUpdate {
    #[default]
    Idle,
    /// Local state already shows the moves; writes are in flight.
    Applying {
        snapshot: Vec<Appointment>,
        cards: Vec<BoardCard>,
    },
    Committed,
    RolledBack,
}

impl BoardUpdate {
    pub fn is_applying(&self) -> bool {
        matches!(self, Self::Applying { .. })
    }
}
