use crate::board_update::{BoardUpdate, CardMove};
use crate::notice::Notice;
use crate::store::{AppointmentStore, CatalogStore};
use crate::{DashboardError, Result};

use salon_core::{
    Appointment, AppointmentFilter, BoardCard, Booking, CalendarEntry, Catalog, MonthCursor,
    build_board, build_bookings, build_calendar, plan_edit,
};

use std::mem;

use chrono::NaiveDate;
use futures::future::join_all;
use log::{debug, error, info, warn};
use uuid::Uuid;

/// Shared state behind the calendar and the board: the authoritative
/// appointment list, the reference catalog and the view settings. Both
/// views are projections of the same list, so a change made through one is
/// visible in the other without a reload.
#[derive(Debug, Clone)]
pub struct ScheduleView {
    appointments: Vec<Appointment>,
    catalog: Catalog,
    filter: AppointmentFilter,
    today: NaiveDate,
    calendar_month: MonthCursor,
    board_month: MonthCursor,
    update: BoardUpdate,
}

impl ScheduleView {
    pub fn new(
        appointments: Vec<Appointment>,
        catalog: Catalog,
        today: NaiveDate,
    ) -> Self {
        Self {
            appointments,
            catalog,
            filter: AppointmentFilter::default(),
            today,
            calendar_month: MonthCursor::containing(today),
            board_month: MonthCursor::containing(today),
            update: BoardUpdate::Idle,
        }
    }

    /// Fetch clients, services, professionals and appointments concurrently,
    /// then derive. Any failed read fails the whole load.
    pub async fn load<S>(store: &S, today: NaiveDate) -> Result<Self>
    where
        S: AppointmentStore + CatalogStore + ?Sized,
    {
        let (clients, services, professionals, appointments) = tokio::try_join!(
            store.list_clients(),
            store.list_services(),
            store.list_professionals(),
            store.list_appointments(),
        )?;

        info!(
            "Loaded {} appointments, {} clients, {} services, {} professionals",
            appointments.len(),
            clients.len(),
            services.len(),
            professionals.len()
        );

        Ok(Self::new(
            appointments,
            Catalog::new(clients, services, professionals),
            today,
        ))
    }

    /// Replace the data from the store, keeping filter and month cursors.
    pub async fn reload<S>(&mut self, store: &S) -> Result<()>
    where
        S: AppointmentStore + CatalogStore + ?Sized,
    {
        let fresh = Self::load(store, self.today).await?;
        self.appointments = fresh.appointments;
        self.catalog = fresh.catalog;
        self.update = BoardUpdate::Idle;
        Ok(())
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn appointment(&self, id: Uuid) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &AppointmentFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, filter: AppointmentFilter) {
        self.filter = filter;
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn update_state(&self) -> &BoardUpdate {
        &self.update
    }

    pub fn calendar_month(&self) -> MonthCursor {
        self.calendar_month
    }

    pub fn board_month(&self) -> MonthCursor {
        self.board_month
    }

    pub fn next_calendar_month(&mut self) {
        self.calendar_month = self.calendar_month.next();
    }

    pub fn previous_calendar_month(&mut self) {
        self.calendar_month = self.calendar_month.previous();
    }

    pub fn next_board_month(&mut self) {
        self.board_month = self.board_month.next();
    }

    pub fn previous_board_month(&mut self) {
        self.board_month = self.board_month.previous();
    }

    /// Board cards. While a move is in flight these are the optimistic
    /// cards; otherwise they are derived from the appointment list.
    pub fn cards(&self) -> Vec<BoardCard> {
        match &self.update {
            BoardUpdate::Applying { cards, .. } => cards.clone(),
            _ => self.derive_cards(),
        }
    }

    /// Calendar entries inside the calendar's month.
    pub fn calendar(&self) -> Vec<CalendarEntry> {
        build_calendar(&self.appointments, &self.catalog, &self.filter)
            .into_iter()
            .filter(|entry| self.calendar_month.contains(entry.date))
            .collect()
    }

    /// Occupied slots for the booking dialog's conflict check.
    pub fn bookings(&self) -> Vec<Booking> {
        build_bookings(&self.appointments, &self.catalog)
    }

    /// Apply `moves` locally and enter `Applying`. Returns the appointments
    /// to persist, in the order given.
    pub fn begin_moves(&mut self, moves: &[CardMove]) -> Result<Vec<Appointment>> {
        if self.update.is_applying() {
            return Err(DashboardError::validation(
                "Another board update is still being saved",
                "moves",
            ));
        }

        let planned = moves
            .iter()
            .map(|card_move| {
                self.appointment(card_move.appointment_id)
                    .map(|current| plan_edit(current, card_move.column, card_move.status))
                    .ok_or_else(|| {
                        DashboardError::not_found("appointment", card_move.appointment_id)
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        let snapshot = self.appointments.clone();
        for updated in &planned {
            if let Some(slot) = self.appointments.iter_mut().find(|a| a.id == updated.id) {
                *slot = updated.clone();
            }
        }

        let cards = self.derive_cards();
        self.update = BoardUpdate::Applying { snapshot, cards };

        debug!("Applied {} board moves locally", planned.len());

        Ok(planned)
    }

    /// Settle the in-flight update from the write results. Any failure
    /// restores the snapshot for the whole batch.
    pub fn finish_moves(&mut self, results: Vec<Result<()>>) -> std::result::Result<(), Notice> {
        let BoardUpdate::Applying { snapshot, .. } = mem::take(&mut self.update) else {
            return Ok(());
        };

        let total = results.len();
        let failures: Vec<DashboardError> = results.into_iter().filter_map(|r| r.err()).collect();

        let Some(first) = failures.first() else {
            self.update = BoardUpdate::Committed;
            info!("Saved {} board moves", total);
            return Ok(());
        };

        for failure in &failures {
            error!("Board move failed: {}", failure);
        }

        self.appointments = snapshot;
        self.update = BoardUpdate::RolledBack;
        warn!(
            "Reverted {} board moves after {} of them failed",
            total,
            failures.len()
        );

        Err(Notice::reverted(first))
    }

    /// Optimistic board move: local state first, then every write
    /// concurrently, then commit or roll back the batch as a whole.
    pub async fn move_cards<S>(
        &mut self,
        store: &S,
        moves: &[CardMove],
    ) -> std::result::Result<(), Notice>
    where
        S: AppointmentStore + ?Sized,
    {
        let planned = self.begin_moves(moves).map_err(|e| Notice::from_error(&e))?;

        let writes = planned.iter().map(|a| store.update_appointment(a));
        let results = join_all(writes).await;

        self.finish_moves(results)
    }

    /// Explicit delete. Local state changes only after the store confirms.
    pub async fn delete_appointment<S>(
        &mut self,
        store: &S,
        id: Uuid,
    ) -> std::result::Result<(), Notice>
    where
        S: AppointmentStore + ?Sized,
    {
        if let Err(e) = store.delete_appointment(id).await {
            error!("Failed to delete appointment {}: {}", id, e);
            return Err(Notice::from_error(&e));
        }

        self.appointments.retain(|a| a.id != id);
        Ok(())
    }

    /// Fold a saved appointment from the booking dialog into the list.
    pub fn upsert(&mut self, appointment: Appointment) {
        match self.appointments.iter_mut().find(|a| a.id == appointment.id) {
            Some(slot) => *slot = appointment,
            None => self.appointments.push(appointment),
        }
    }

    fn derive_cards(&self) -> Vec<BoardCard> {
        build_board(
            &self.appointments,
            &self.catalog,
            &self.filter,
            self.today,
            self.board_month,
        )
    }
}
