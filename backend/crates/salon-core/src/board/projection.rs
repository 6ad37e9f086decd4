use crate::directive;
use crate::{
    Appointment, AppointmentFilter, AppointmentStatus, BoardCard, BoardColumn, Booking,
    CalendarEntry, Catalog, MonthCursor, ResolvedAppointment,
};

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};

fn resolve_sorted<'a>(
    appointments: &'a [Appointment],
    catalog: &'a Catalog,
    keep: impl Fn(&ResolvedAppointment<'a>) -> bool,
) -> Vec<ResolvedAppointment<'a>> {
    let mut resolved: Vec<_> = appointments
        .iter()
        .filter_map(|appointment| catalog.resolve(appointment))
        .filter(|r| keep(r))
        .collect();

    // ClockTime orders by minutes, so "9:00" lands before "10:00".
    resolved.sort_by_key(|r| (r.appointment.date, r.appointment.start_time));
    resolved
}

/// Derive kanban cards for the board.
pub fn build_board(
    appointments: &[Appointment],
    catalog: &Catalog,
    filter: &AppointmentFilter,
    today: NaiveDate,
    board_month: MonthCursor,
) -> Vec<BoardCard> {
    let resolved = resolve_sorted(appointments, catalog, |r| {
        filter.matches_board(r.appointment, r.client, today, board_month)
    });

    let mut next_order: HashMap<BoardColumn, usize> = HashMap::new();

    resolved
        .into_iter()
        .map(|r| {
            let column = r.appointment.board_column();
            let slot = next_order.entry(column).or_default();
            let order = *slot;
            *slot += 1;

            BoardCard {
                appointment_id: r.appointment.id,
                column,
                order,
                status: r.appointment.status,
                client_name: r.client.name.clone(),
                professional_name: r.professional.name.clone(),
                service_names: r.service_names(),
                date: r.appointment.date,
                start: r.appointment.start_time,
                end: r.end_time(),
                total_cents: r.total_cents(),
            }
        })
        .collect()
}

/// Derive calendar entries. Same resolution and filters as the board,
/// without the board's date window.
pub fn build_calendar(
    appointments: &[Appointment],
    catalog: &Catalog,
    filter: &AppointmentFilter,
) -> Vec<CalendarEntry> {
    resolve_sorted(appointments, catalog, |r| filter.matches(r.appointment, r.client))
        .into_iter()
        .map(|r| CalendarEntry {
            appointment_id: r.appointment.id,
            professional_id: r.appointment.professional_id,
            title: format!("{} - {}", r.client.name, r.service_names()),
            status: r.appointment.status,
            date: r.appointment.date,
            start: r.appointment.start_time,
            end: r.end_time(),
        })
        .collect()
}

/// Slots held by every resolvable appointment, whatever its status, for the
/// conflict check.
pub fn build_bookings(appointments: &[Appointment], catalog: &Catalog) -> Vec<Booking> {
    appointments
        .iter()
        .filter_map(|appointment| catalog.resolve(appointment))
        .map(|r| r.booking())
        .collect()
}

/// Appointment as it should be persisted after its card is dropped on
/// `column`. Status follows the column.
pub fn plan_move(appointment: &Appointment, column: BoardColumn) -> Appointment {
    plan_edit(appointment, column, column.status())
}

/// General form used by bulk edits, where status may be set independently
/// of the lane. The override is kept only when the lane differs from the
/// status default. Directive tokens still in the notes text are dropped.
pub fn plan_edit(
    appointment: &Appointment,
    column: BoardColumn,
    status: AppointmentStatus,
) -> Appointment {
    let mut updated = appointment.clone();
    updated.status = status;
    updated.board_column_override = (column != status.default_column()).then_some(column);
    if let Some(notes) = appointment
        .notes
        .as_deref()
        .filter(|notes| directive::parse(notes).is_some())
    {
        let text = directive::strip(notes);
        updated.notes = (!text.is_empty()).then_some(text);
    }
    updated.updated_at = Utc::now();
    updated
}
