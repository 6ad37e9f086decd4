use crate::{BoardColumn, CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Appointment lifecycle status.
///
/// Canonical values are stored as Portuguese snake case. Rows written by
/// older clients may carry English synonyms; those are accepted on read and
/// never written back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    #[serde(alias = "scheduled")]
    Agendado,
    Confirmado,
    #[serde(alias = "completed")]
    Concluido,
    #[serde(alias = "cancelled")]
    Cancelado,
    #[serde(alias = "no-show")]
    NaoCompareceu,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 5] = [
        Self::Agendado,
        Self::Confirmado,
        Self::Concluido,
        Self::Cancelado,
        Self::NaoCompareceu,
    ];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Agendado => "agendado",
            Self::Confirmado => "confirmado",
            Self::Concluido => "concluido",
            Self::Cancelado => "cancelado",
            Self::NaoCompareceu => "nao_compareceu",
        }
    }

    /// Board column a card with this status lands in when nothing pins it elsewhere.
    pub fn default_column(&self) -> BoardColumn {
        match self {
            Self::Agendado => BoardColumn::Pendiente,
            Self::Confirmado => BoardColumn::Confirmado,
            Self::Concluido => BoardColumn::Concluido,
            Self::Cancelado => BoardColumn::Cancelado,
            Self::NaoCompareceu => BoardColumn::NaoCompareceu,
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "agendado" | "scheduled" => Ok(Self::Agendado),
            "confirmado" => Ok(Self::Confirmado),
            "concluido" | "completed" => Ok(Self::Concluido),
            "cancelado" | "cancelled" => Ok(Self::Cancelado),
            "nao_compareceu" | "no-show" => Ok(Self::NaoCompareceu),
            _ => Err(CoreError::InvalidAppointmentStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
