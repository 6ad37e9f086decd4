use salon_core::{Appointment, Client, ErrorLocation, Professional, Service};
use salon_dashboard::{AppointmentStore, CatalogStore, Result as DashboardResult, SqliteStore};
use salon_db::DbError;

use std::collections::HashSet;
use std::panic::Location;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

/// Delegates to a real store but fails updates for chosen appointments.
pub struct FlakyStore<'a> {
    inner: &'a SqliteStore,
    failing: HashSet<Uuid>,
    update_calls: AtomicUsize,
}

impl<'a> FlakyStore<'a> {
    pub fn new(inner: &'a SqliteStore, failing: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            inner,
            failing: failing.into_iter().collect(),
            update_calls: AtomicUsize::new(0),
        }
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AppointmentStore for FlakyStore<'_> {
    async fn list_appointments(&self) -> DashboardResult<Vec<Appointment>> {
        self.inner.list_appointments().await
    }

    async fn create_appointment(&self, appointment: &Appointment) -> DashboardResult<()> {
        self.inner.create_appointment(appointment).await
    }

    async fn update_appointment(&self, appointment: &Appointment) -> DashboardResult<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.contains(&appointment.id) {
            return Err(DbError::Initialization {
                message: "connection reset".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }

        self.inner.update_appointment(appointment).await
    }

    async fn delete_appointment(&self, id: Uuid) -> DashboardResult<()> {
        if self.failing.contains(&id) {
            return Err(DbError::Initialization {
                message: "connection reset".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
            .into());
        }

        self.inner.delete_appointment(id).await
    }
}

#[async_trait]
impl CatalogStore for FlakyStore<'_> {
    async fn list_clients(&self) -> DashboardResult<Vec<Client>> {
        self.inner.list_clients().await
    }

    async fn list_services(&self) -> DashboardResult<Vec<Service>> {
        self.inner.list_services().await
    }

    async fn list_professionals(&self) -> DashboardResult<Vec<Professional>> {
        self.inner.list_professionals().await
    }

    async fn create_client(&self, client: &Client) -> DashboardResult<()> {
        self.inner.create_client(client).await
    }

    async fn update_client(&self, client: &Client) -> DashboardResult<()> {
        self.inner.update_client(client).await
    }

    async fn delete_client(&self, id: Uuid) -> DashboardResult<()> {
        self.inner.delete_client(id).await
    }
}
