use crate::notice::Notice;
use crate::store::{AppointmentStore, CatalogStore, LedgerStore};
use crate::{DashboardError, Result};

use salon_core::{Catalog, Client, ClientTotals};

use log::{error, info};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientRow {
    pub client: Client,
    pub totals: ClientTotals,
}

/// Client list with lifetime totals recomputed from appointments and the
/// ledger at load time.
#[derive(Debug, Clone, Default)]
pub struct ClientDirectory {
    rows: Vec<ClientRow>,
    search: String,
}

impl ClientDirectory {
    pub async fn load<S>(store: &S) -> Result<Self>
    where
        S: AppointmentStore + CatalogStore + LedgerStore + ?Sized,
    {
        let (clients, services, professionals, appointments, transactions) = tokio::try_join!(
            store.list_clients(),
            store.list_services(),
            store.list_professionals(),
            store.list_appointments(),
            store.list_transactions(),
        )?;

        let catalog = Catalog::new(clients.clone(), services, professionals);
        let rows = clients
            .into_iter()
            .map(|client| ClientRow {
                totals: ClientTotals::compute(client.id, &appointments, &transactions, &catalog),
                client,
            })
            .collect();

        Ok(Self {
            rows,
            search: String::new(),
        })
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Rows matching the search box, in name order.
    pub fn rows(&self) -> Vec<&ClientRow> {
        let mut rows: Vec<&ClientRow> = self
            .rows
            .iter()
            .filter(|row| row.client.name_matches(&self.search))
            .collect();
        rows.sort_by_key(|row| row.client.name.to_lowercase());
        rows
    }

    pub fn totals(&self, client_id: Uuid) -> Option<&ClientTotals> {
        self.rows
            .iter()
            .find(|row| row.client.id == client_id)
            .map(|row| &row.totals)
    }

    pub async fn add_client<S>(&mut self, store: &S, client: Client) -> std::result::Result<(), Notice>
    where
        S: CatalogStore + ?Sized,
    {
        if client.name.trim().is_empty() {
            let e = DashboardError::validation("Client name is required", "name");
            return Err(Notice::from_error(&e));
        }

        if let Err(e) = store.create_client(&client).await {
            error!("Failed to create client {}: {}", client.name, e);
            return Err(Notice::from_error(&e));
        }

        info!("Created client {}", client.id);
        self.rows.push(ClientRow {
            totals: ClientTotals {
                client_id: client.id,
                ..ClientTotals::default()
            },
            client,
        });

        Ok(())
    }

    pub async fn remove_client<S>(&mut self, store: &S, id: Uuid) -> std::result::Result<(), Notice>
    where
        S: CatalogStore + ?Sized,
    {
        if let Err(e) = store.delete_client(id).await {
            error!("Failed to delete client {}: {}", id, e);
            return Err(Notice::from_error(&e));
        }

        self.rows.retain(|row| row.client.id != id);
        Ok(())
    }
}
