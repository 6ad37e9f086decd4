use crate::{AppointmentStatus, CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Fixed kanban lanes, in board order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoardColumn {
    Pendiente,
    Confirmado,
    Concluido,
    NaoCompareceu,
    Cancelado,
}

impl BoardColumn {
    pub const ALL: [BoardColumn; 5] = [
        Self::Pendiente,
        Self::Confirmado,
        Self::Concluido,
        Self::NaoCompareceu,
        Self::Cancelado,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Pendiente => "pendiente",
            Self::Confirmado => "confirmado",
            Self::Concluido => "concluido",
            Self::NaoCompareceu => "nao_compareceu",
            Self::Cancelado => "cancelado",
        }
    }

    /// Lookup by column id. Unknown ids (e.g. lanes from an older board
    /// layout) yield `None` rather than an error.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.id() == id)
    }

    /// Status a card takes when dropped into this column.
    pub fn status(&self) -> AppointmentStatus {
        match self {
            Self::Pendiente => AppointmentStatus::Agendado,
            Self::Confirmado => AppointmentStatus::Confirmado,
            Self::Concluido => AppointmentStatus::Concluido,
            Self::NaoCompareceu => AppointmentStatus::NaoCompareceu,
            Self::Cancelado => AppointmentStatus::Cancelado,
        }
    }
}

impl FromStr for BoardColumn {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::from_id(s).ok_or_else(|| CoreError::InvalidBoardColumn {
            value: s.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}

impl std::fmt::Display for BoardColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
