mod common;

use common::{Salon, date, time, today};

use salon_config::ScheduleConfig;
use salon_core::{AppointmentStatus, BoardColumn, Catalog};
use salon_dashboard::{AppointmentStore, BookingDialog, DashboardError, ScheduleView};

use googletest::prelude::*;
use uuid::Uuid;

fn new_dialog() -> BookingDialog {
    BookingDialog::new(time(8, 0), time(20, 0))
}

/// Bia with Carla on `today()` for the given service.
fn booking_for_bia(salon: &Salon, at: (u32, u32), service_id: Uuid) -> BookingDialog {
    let mut dialog = new_dialog();
    dialog.client_id = Some(salon.bia.id);
    dialog.professional_id = Some(salon.carla.id);
    dialog.service_ids = vec![service_id];
    dialog.date = Some(today());
    dialog.start_time = Some(time(at.0, at.1));
    dialog
}

async fn view_with_nine_oclock_cut(salon: &Salon) -> ScheduleView {
    let existing = salon.appointment(today(), time(9, 0), &salon.cut);
    salon.book(&existing).await;
    ScheduleView::load(&salon.store, today()).await.unwrap()
}

#[tokio::test]
async fn given_same_slot_booked_when_checking_conflict_then_warning_names_professional_and_window() {
    // Given: Carla booked 09:00-10:00
    let salon = Salon::open().await;
    let view = view_with_nine_oclock_cut(&salon).await;

    // When: Bia asks for the same hour
    let dialog = booking_for_bia(&salon, (9, 0), salon.cut.id);

    // Then
    assert_that!(
        dialog.conflict(&view),
        some(eq("Carla already has an appointment from 09:00 to 10:00 on 10/06/2024"))
    );
}

#[tokio::test]
async fn given_adjacent_slot_when_checking_conflict_then_no_warning() {
    let salon = Salon::open().await;
    let view = view_with_nine_oclock_cut(&salon).await;

    let dialog = booking_for_bia(&salon, (10, 0), salon.blow_dry.id);

    assert_that!(dialog.conflict(&view), none());
    assert_that!(dialog.validate(&view).is_ok(), eq(true));
}

#[tokio::test]
async fn given_partial_overlap_when_checking_conflict_then_warning_shown() {
    // Given: 09:45 for 30 minutes ends 10:15, inside Carla's 09:00-10:00
    let salon = Salon::open().await;
    let view = view_with_nine_oclock_cut(&salon).await;

    let dialog = booking_for_bia(&salon, (9, 45), salon.blow_dry.id);

    assert_that!(dialog.conflict(&view), some(contains_substring("09:00 to 10:00")));
}

#[tokio::test]
async fn given_other_professional_or_other_day_when_checking_conflict_then_no_warning() {
    let salon = Salon::open().await;
    let view = view_with_nine_oclock_cut(&salon).await;

    let mut with_duda = booking_for_bia(&salon, (9, 0), salon.cut.id);
    with_duda.professional_id = Some(salon.duda.id);
    assert_that!(with_duda.conflict(&view), none());

    let mut next_day = booking_for_bia(&salon, (9, 0), salon.cut.id);
    next_day.date = Some(date(2024, 6, 11));
    assert_that!(next_day.conflict(&view), none());
}

#[tokio::test]
async fn given_cancelled_booking_when_checking_conflict_then_slot_is_still_taken() {
    let salon = Salon::open().await;
    let mut cancelled = salon.appointment(today(), time(9, 0), &salon.cut);
    cancelled.status = AppointmentStatus::Cancelado;
    salon.book(&cancelled).await;
    let view = ScheduleView::load(&salon.store, today()).await.unwrap();

    let dialog = booking_for_bia(&salon, (9, 0), salon.cut.id);

    assert_that!(
        dialog.conflict(&view),
        some(contains_substring("Carla already has an appointment"))
    );
}

#[tokio::test]
async fn given_incomplete_selection_when_checking_conflict_then_no_warning_yet() {
    // Given: Everything but the service
    let salon = Salon::open().await;
    let view = view_with_nine_oclock_cut(&salon).await;
    let mut dialog = booking_for_bia(&salon, (9, 0), salon.cut.id);
    dialog.service_ids.clear();

    // Then
    assert_that!(dialog.duration_minutes(view.catalog()), none());
    assert_that!(dialog.conflict(&view), none());
}

#[tokio::test]
async fn given_two_services_when_computing_duration_then_minutes_are_summed() {
    let salon = Salon::open().await;
    let view = ScheduleView::load(&salon.store, today()).await.unwrap();

    let mut dialog = booking_for_bia(&salon, (9, 0), salon.cut.id);
    dialog.service_ids.push(salon.blow_dry.id);

    assert_that!(dialog.duration_minutes(view.catalog()), some(eq(90)));
}

#[tokio::test]
async fn given_missing_fields_when_validating_then_all_are_listed() {
    let salon = Salon::open().await;
    let view = ScheduleView::load(&salon.store, today()).await.unwrap();

    let mut dialog = new_dialog();
    dialog.client_id = Some(salon.ana.id);

    let err = dialog.validate(&view).unwrap_err();

    assert!(matches!(
        err,
        DashboardError::Validation {
            field: Some("professional"),
            ..
        }
    ));
    assert_that!(
        err.user_message(),
        eq("Please fill in: professional, service, date, start time")
    );
}

#[tokio::test]
async fn given_service_removed_from_catalog_when_validating_then_rejected() {
    let salon = Salon::open().await;
    let view = ScheduleView::load(&salon.store, today()).await.unwrap();

    let dialog = booking_for_bia(&salon, (9, 0), Uuid::new_v4());

    let err = dialog.validate(&view).unwrap_err();

    assert!(matches!(
        err,
        DashboardError::Validation {
            field: Some("service"),
            ..
        }
    ));
}

#[tokio::test]
async fn given_booking_running_past_closing_when_validating_then_rejected() {
    // Given: 19:30 plus a 60 minute cut ends after 20:00
    let salon = Salon::open().await;
    let view = ScheduleView::load(&salon.store, today()).await.unwrap();
    let late = booking_for_bia(&salon, (19, 30), salon.cut.id);
    let early = booking_for_bia(&salon, (7, 30), salon.blow_dry.id);
    let last_slot = booking_for_bia(&salon, (19, 0), salon.cut.id);

    // Then
    assert_that!(
        late.validate(&view).unwrap_err().user_message(),
        eq("Appointments must be between 08:00 and 20:00")
    );
    assert_that!(early.validate(&view).is_err(), eq(true));
    assert_that!(last_slot.validate(&view).is_ok(), eq(true));
}

#[tokio::test]
async fn given_default_schedule_config_when_building_dialog_then_business_hours_apply() {
    let salon = Salon::open().await;
    let view = ScheduleView::load(&salon.store, today()).await.unwrap();

    let mut dialog = BookingDialog::from_config(&ScheduleConfig::default()).unwrap();
    dialog.client_id = Some(salon.ana.id);
    dialog.professional_id = Some(salon.carla.id);
    dialog.service_ids = vec![salon.cut.id];
    dialog.date = Some(today());
    dialog.start_time = Some(time(20, 0));

    assert_that!(dialog.validate(&view).is_err(), eq(true));
}

#[tokio::test]
async fn given_conflict_when_submitting_then_nothing_is_written() {
    let salon = Salon::open().await;
    let mut view = view_with_nine_oclock_cut(&salon).await;
    let dialog = booking_for_bia(&salon, (9, 30), salon.blow_dry.id);

    let notice = dialog.submit(&salon.store, &mut view).await.unwrap_err();

    assert_that!(notice.is_error(), eq(true));
    assert_that!(notice.message, contains_substring("Carla already has an appointment"));
    assert_that!(salon.store.list_appointments().await.unwrap(), len(eq(1)));
    assert_that!(view.appointments().len(), eq(1));
}

#[tokio::test]
async fn given_valid_booking_when_submitting_then_created_and_shown_on_board() {
    // Given
    let salon = Salon::open().await;
    let mut view = ScheduleView::load(&salon.store, today()).await.unwrap();
    let mut dialog = booking_for_bia(&salon, (11, 0), salon.cut.id);
    dialog.notes = Some("  Primeira visita  ".to_string());

    // When
    let saved = dialog.submit(&salon.store, &mut view).await.unwrap();

    // Then: Persisted with trimmed notes and visible without a reload
    let stored = salon.store.list_appointments().await.unwrap();
    assert_that!(stored, len(eq(1)));
    assert_that!(stored[0].id, eq(saved.id));
    assert_that!(stored[0].notes, some(eq("Primeira visita")));
    assert_that!(stored[0].status, eq(AppointmentStatus::Agendado));

    let cards = view.cards();
    assert_that!(cards, len(eq(1)));
    assert_that!(cards[0].appointment_id, eq(saved.id));
    assert_that!(cards[0].column, eq(BoardColumn::Pendiente));
}

#[tokio::test]
async fn given_editing_own_appointment_when_shifting_time_then_no_self_conflict() {
    // Given: Carla's 09:00 cut opened for editing
    let salon = Salon::open().await;
    let existing = salon.appointment(today(), time(9, 0), &salon.cut);
    salon.book(&existing).await;
    let mut view = ScheduleView::load(&salon.store, today()).await.unwrap();
    let mut dialog = new_dialog().edit(view.appointment(existing.id).unwrap());

    // When: Moved 30 minutes later, overlapping its own old slot
    dialog.start_time = Some(time(9, 30));

    // Then
    assert_that!(dialog.editing(), some(eq(existing.id)));
    assert_that!(dialog.conflict(&view), none());

    let saved = dialog.submit(&salon.store, &mut view).await.unwrap();
    assert_that!(saved.id, eq(existing.id));

    let stored = salon.store.list_appointments().await.unwrap();
    assert_that!(stored, len(eq(1)));
    assert_that!(stored[0].start_time, eq(time(9, 30)));
}

#[tokio::test]
async fn given_pinned_lane_when_editing_other_fields_then_lane_is_kept() {
    // Given: A scheduled appointment pinned to the no-show lane
    let salon = Salon::open().await;
    let mut pinned = salon.appointment(today(), time(9, 0), &salon.cut);
    pinned.board_column_override = Some(BoardColumn::NaoCompareceu);
    pinned.notes = Some("Cliente VIP".to_string());
    salon.book(&pinned).await;
    let mut view = ScheduleView::load(&salon.store, today()).await.unwrap();

    // When: Only the time changes
    let mut dialog = new_dialog().edit(view.appointment(pinned.id).unwrap());
    dialog.start_time = Some(time(14, 0));
    dialog.submit(&salon.store, &mut view).await.unwrap();

    // Then
    let stored = salon.store.list_appointments().await.unwrap();
    assert_that!(stored[0].board_column(), eq(BoardColumn::NaoCompareceu));
    assert_that!(stored[0].notes, some(eq("Cliente VIP")));

    // When: The status is set to match the pinned lane
    let mut dialog = new_dialog().edit(&stored[0]);
    dialog.status = AppointmentStatus::NaoCompareceu;
    dialog.submit(&salon.store, &mut view).await.unwrap();

    // Then: The override is no longer needed
    let stored = salon.store.list_appointments().await.unwrap();
    assert_that!(stored[0].board_column_override, none());
    assert_that!(stored[0].board_column(), eq(BoardColumn::NaoCompareceu));
}

#[tokio::test]
async fn given_unknown_lane_token_in_notes_when_editing_time_then_stored_notes_are_unchanged() {
    // Given: A row whose directive names no known lane
    let salon = Salon::open().await;
    let mut existing = salon.appointment(today(), time(9, 0), &salon.cut);
    existing.notes = Some("Cliente VIP kanbanColumnId:em-contato".to_string());
    salon.book(&existing).await;
    let mut view = ScheduleView::load(&salon.store, today()).await.unwrap();

    // When: Only the start time changes
    let mut dialog = new_dialog().edit(view.appointment(existing.id).unwrap());
    dialog.start_time = Some(time(11, 0));
    dialog.submit(&salon.store, &mut view).await.unwrap();

    // Then
    let raw: Option<String> =
        sqlx::query_scalar("SELECT notes FROM salon_appointments WHERE id = ?")
            .bind(existing.id.to_string())
            .fetch_one(&salon.pool)
            .await
            .unwrap();
    assert_that!(raw, some(eq("Cliente VIP kanbanColumnId:em-contato")));

    let stored = salon.store.list_appointments().await.unwrap();
    assert_that!(stored[0].start_time, eq(time(11, 0)));
    assert_that!(stored[0].board_column(), eq(BoardColumn::Pendiente));
}

#[tokio::test]
async fn given_service_with_maximal_duration_when_validating_then_rejected_without_overflow() {
    let salon = Salon::open().await;
    let mut endless = salon.cut.clone();
    endless.id = Uuid::new_v4();
    endless.duration_minutes = u32::MAX;
    let catalog = Catalog::new(
        vec![salon.bia.clone()],
        vec![endless.clone(), salon.blow_dry.clone()],
        vec![salon.carla.clone()],
    );
    let view = ScheduleView::new(Vec::new(), catalog, today());

    let mut dialog = booking_for_bia(&salon, (9, 0), endless.id);
    dialog.service_ids.push(salon.blow_dry.id);

    assert_that!(dialog.duration_minutes(view.catalog()), some(eq(u32::MAX)));
    assert!(matches!(
        dialog.validate(&view),
        Err(DashboardError::Validation {
            field: Some("start time"),
            ..
        })
    ));
}
