use crate::{Appointment, Booking, Client, ClockTime, Professional, Service};

use std::collections::HashMap;

use log::debug;
use uuid::Uuid;

/// Loaded reference collections, keyed by id for resolution.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    clients: HashMap<Uuid, Client>,
    services: HashMap<Uuid, Service>,
    professionals: HashMap<Uuid, Professional>,
}

impl Catalog {
    pub fn new(
        clients: Vec<Client>,
        services: Vec<Service>,
        professionals: Vec<Professional>,
    ) -> Self {
        Self {
            clients: clients.into_iter().map(|c| (c.id, c)).collect(),
            services: services.into_iter().map(|s| (s.id, s)).collect(),
            professionals: professionals.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    pub fn client(&self, id: Uuid) -> Option<&Client> {
        self.clients.get(&id)
    }

    pub fn service(&self, id: Uuid) -> Option<&Service> {
        self.services.get(&id)
    }

    pub fn professional(&self, id: Uuid) -> Option<&Professional> {
        self.professionals.get(&id)
    }

    pub fn clients(&self) -> impl Iterator<Item = &Client> {
        self.clients.values()
    }

    pub fn services(&self) -> impl Iterator<Item = &Service> {
        self.services.values()
    }

    pub fn professionals(&self) -> impl Iterator<Item = &Professional> {
        self.professionals.values()
    }

    /// Join an appointment against the loaded collections.
    ///
    /// Returns `None` when any reference dangles or no service is attached;
    /// such appointments are left out of every derived view.
    pub fn resolve<'a>(&'a self, appointment: &'a Appointment) -> Option<ResolvedAppointment<'a>> {
        let client = self.client(appointment.client_id);
        let professional = self.professional(appointment.professional_id);
        let services: Option<Vec<&Service>> = appointment
            .service_ids
            .iter()
            .map(|id| self.service(*id))
            .collect();

        match (client, professional, services) {
            (Some(client), Some(professional), Some(services)) if !services.is_empty() => {
                Some(ResolvedAppointment {
                    appointment,
                    client,
                    professional,
                    services,
                })
            }
            _ => {
                debug!("Dropping unresolvable appointment {}", appointment.id);
                None
            }
        }
    }
}

/// An appointment with its references looked up.
#[derive(Debug, Clone)]
pub struct ResolvedAppointment<'a> {
    pub appointment: &'a Appointment,
    pub client: &'a Client,
    pub professional: &'a Professional,
    pub services: Vec<&'a Service>,
}

impl ResolvedAppointment<'_> {
    pub fn duration_minutes(&self) -> u32 {
        self.services
            .iter()
            .fold(0, |total, s| total.saturating_add(s.duration_minutes))
    }

    /// Always derived from start plus service durations.
    pub fn end_time(&self) -> ClockTime {
        self.appointment
            .start_time
            .add_minutes(self.duration_minutes())
    }

    pub fn total_cents(&self) -> i64 {
        self.services.iter().map(|s| s.price_cents).sum()
    }

    pub fn service_names(&self) -> String {
        self.services
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn booking(&self) -> Booking {
        Booking {
            appointment_id: self.appointment.id,
            professional_id: self.appointment.professional_id,
            date: self.appointment.date,
            start: self.appointment.start_time,
            duration_minutes: self.duration_minutes(),
        }
    }
}
