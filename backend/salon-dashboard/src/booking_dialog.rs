use crate::notice::Notice;
use crate::schedule_view::ScheduleView;
use crate::store::AppointmentStore;
use crate::{DashboardError, Result};

use salon_config::ScheduleConfig;
use salon_core::{
    Appointment, AppointmentStatus, Candidate, Catalog, ClockTime, find_conflict, plan_edit,
};

use chrono::{NaiveDate, Utc};
use log::{error, info};
use uuid::Uuid;

/// Create/edit form for a single appointment. Fields stay optional until
/// picked; the conflict warning appears once professional, date, start time
/// and services are all chosen.
#[derive(Debug, Clone)]
pub struct BookingDialog {
    pub client_id: Option<Uuid>,
    pub professional_id: Option<Uuid>,
    pub service_ids: Vec<Uuid>,
    pub date: Option<NaiveDate>,
    pub start_time: Option<ClockTime>,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    editing: Option<Appointment>,
    opening: ClockTime,
    closing: ClockTime,
}

impl BookingDialog {
    pub fn new(opening: ClockTime, closing: ClockTime) -> Self {
        Self {
            client_id: None,
            professional_id: None,
            service_ids: Vec::new(),
            date: None,
            start_time: None,
            status: AppointmentStatus::default(),
            notes: None,
            editing: None,
            opening,
            closing,
        }
    }

    pub fn from_config(schedule: &ScheduleConfig) -> Result<Self> {
        Ok(Self::new(schedule.opening()?, schedule.closing()?))
    }

    /// Prefill from an existing appointment.
    pub fn edit(mut self, appointment: &Appointment) -> Self {
        self.client_id = Some(appointment.client_id);
        self.professional_id = Some(appointment.professional_id);
        self.service_ids = appointment.service_ids.clone();
        self.date = Some(appointment.date);
        self.start_time = Some(appointment.start_time);
        self.status = appointment.status;
        self.notes = appointment.notes.clone();
        self.editing = Some(appointment.clone());
        self
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing.as_ref().map(|a| a.id)
    }

    /// Summed duration of the selected services. None until a service is
    /// picked or while any selection is missing from the catalog.
    pub fn duration_minutes(&self, catalog: &Catalog) -> Option<u32> {
        if self.service_ids.is_empty() {
            return None;
        }
        self.service_ids
            .iter()
            .try_fold(0u32, |total, id| {
                catalog
                    .service(*id)
                    .map(|s| total.saturating_add(s.duration_minutes))
            })
    }

    pub fn candidate(&self, catalog: &Catalog) -> Candidate {
        Candidate {
            professional_id: self.professional_id,
            date: self.date,
            start: self.start_time,
            duration_minutes: self.duration_minutes(catalog),
            editing: self.editing(),
        }
    }

    /// Inline warning when the professional is already booked in the slot.
    pub fn conflict(&self, view: &ScheduleView) -> Option<String> {
        let catalog = view.catalog();
        let bookings = view.bookings();
        let clash = find_conflict(&self.candidate(catalog), &bookings)?;

        let professional = catalog
            .professional(clash.professional_id)
            .map(|p| p.name.as_str())
            .unwrap_or("This professional");

        Some(format!(
            "{} already has an appointment from {} to {} on {}",
            professional,
            clash.start,
            clash.start.add_minutes(clash.duration_minutes),
            clash.date.format("%d/%m/%Y")
        ))
    }

    /// Everything that must hold before a write: required fields, known
    /// services, business hours and no double booking.
    pub fn validate(&self, view: &ScheduleView) -> Result<()> {
        let mut missing = Vec::new();
        if self.client_id.is_none() {
            missing.push("client");
        }
        if self.professional_id.is_none() {
            missing.push("professional");
        }
        if self.service_ids.is_empty() {
            missing.push("service");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        if self.start_time.is_none() {
            missing.push("start time");
        }
        if let Some(&first) = missing.first() {
            return Err(DashboardError::validation(
                format!("Please fill in: {}", missing.join(", ")),
                first,
            ));
        }

        let Some(duration) = self.duration_minutes(view.catalog()) else {
            return Err(DashboardError::validation(
                "A selected service is no longer available",
                "service",
            ));
        };

        if let Some(start) = self.start_time {
            let end_minutes = start.minutes().saturating_add(duration);
            if start < self.opening || end_minutes > self.closing.minutes() {
                return Err(DashboardError::validation(
                    format!(
                        "Appointments must be between {} and {}",
                        self.opening, self.closing
                    ),
                    "start time",
                ));
            }
        }

        if let Some(warning) = self.conflict(view) {
            return Err(DashboardError::validation(warning, "start time"));
        }

        Ok(())
    }

    /// Appointment as it will be saved. Call after `validate`.
    pub fn to_appointment(&self) -> Result<Appointment> {
        let (Some(client_id), Some(professional_id), Some(date), Some(start_time)) =
            (self.client_id, self.professional_id, self.date, self.start_time)
        else {
            return Err(DashboardError::validation(
                "The booking is incomplete",
                "appointment",
            ));
        };

        let mut appointment = match &self.editing {
            // A pinned lane survives the edit unless the new status makes
            // it the default again.
            Some(original) => match original.board_column_override {
                Some(column) => plan_edit(original, column, self.status),
                None => {
                    let mut updated = original.clone();
                    updated.status = self.status;
                    updated.updated_at = Utc::now();
                    updated
                }
            },
            None => {
                let mut created = Appointment::new(
                    client_id,
                    professional_id,
                    self.service_ids.clone(),
                    date,
                    start_time,
                );
                created.status = self.status;
                created
            }
        };

        appointment.client_id = client_id;
        appointment.professional_id = professional_id;
        appointment.service_ids = self.service_ids.clone();
        appointment.date = date;
        appointment.start_time = start_time;
        appointment.notes = self
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        Ok(appointment)
    }

    /// Validate, then create or update. On success the view is updated in
    /// place; on failure the dialog keeps its fields.
    pub async fn submit<S>(
        &self,
        store: &S,
        view: &mut ScheduleView,
    ) -> std::result::Result<Appointment, Notice>
    where
        S: AppointmentStore + ?Sized,
    {
        let appointment = self
            .validate(view)
            .and_then(|()| self.to_appointment())
            .map_err(|e| Notice::from_error(&e))?;

        let saved = if self.editing.is_some() {
            store.update_appointment(&appointment).await
        } else {
            store.create_appointment(&appointment).await
        };

        if let Err(e) = saved {
            error!("Failed to save appointment {}: {}", appointment.id, e);
            return Err(Notice::from_error(&e));
        }

        info!(
            "Saved appointment {} on {} at {}",
            appointment.id, appointment.date, appointment.start_time
        );
        view.upsert(appointment.clone());

        Ok(appointment)
    }
}
