use crate::{AppointmentStatus, BoardColumn};

use std::str::FromStr;

use proptest::prelude::*;

#[test]
fn test_appointment_status_as_str() {
    assert_eq!(AppointmentStatus::Agendado.as_str(), "agendado");
    assert_eq!(AppointmentStatus::Confirmado.as_str(), "confirmado");
    assert_eq!(AppointmentStatus::Concluido.as_str(), "concluido");
    assert_eq!(AppointmentStatus::Cancelado.as_str(), "cancelado");
    assert_eq!(AppointmentStatus::NaoCompareceu.as_str(), "nao_compareceu");
}

#[test]
fn test_appointment_status_from_str_canonical() {
    for status in AppointmentStatus::ALL {
        assert_eq!(AppointmentStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_appointment_status_from_str_normalizes_legacy_synonyms() {
    assert_eq!(
        AppointmentStatus::from_str("scheduled").unwrap(),
        AppointmentStatus::Agendado
    );
    assert_eq!(
        AppointmentStatus::from_str("completed").unwrap(),
        AppointmentStatus::Concluido
    );
    assert_eq!(
        AppointmentStatus::from_str("cancelled").unwrap(),
        AppointmentStatus::Cancelado
    );
    assert_eq!(
        AppointmentStatus::from_str("no-show").unwrap(),
        AppointmentStatus::NaoCompareceu
    );
    assert!(AppointmentStatus::from_str("invalid").is_err());
}

#[test]
fn test_appointment_status_serde_accepts_legacy_and_writes_canonical() {
    let status: AppointmentStatus = serde_json::from_str("\"no-show\"").unwrap();
    assert_eq!(status, AppointmentStatus::NaoCompareceu);
    assert_eq!(serde_json::to_string(&status).unwrap(), "\"nao_compareceu\"");
}

#[test]
fn test_appointment_status_default_columns() {
    assert_eq!(
        AppointmentStatus::Agendado.default_column(),
        BoardColumn::Pendiente
    );
    assert_eq!(
        AppointmentStatus::NaoCompareceu.default_column(),
        BoardColumn::NaoCompareceu
    );
}

proptest! {
    #[test]
    fn given_any_status_when_mapped_to_column_and_back_then_unchanged(
        status in prop::sample::select(AppointmentStatus::ALL.to_vec())
    ) {
        prop_assert_eq!(status.default_column().status(), status);
    }
}
