//! Data-store seams the views depend on. Every call is scoped to one tenant
//! by whatever pool or session backs the implementation.

use crate::Result;

use salon_core::{
    Appointment, Client, Product, Professional, Service, StockMovement, Transaction,
};

use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait AppointmentStore: Send + Sync {
    async fn list_appointments(&self) -> Result<Vec<Appointment>>;

    async fn create_appointment(&self, appointment: &Appointment) -> Result<()>;

    async fn update_appointment(&self, appointment: &Appointment) -> Result<()>;

    async fn delete_appointment(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_clients(&self) -> Result<Vec<Client>>;

    async fn list_services(&self) -> Result<Vec<Service>>;

    async fn list_professionals(&self) -> Result<Vec<Professional>>;

    async fn create_client(&self, client: &Client) -> Result<()>;

    async fn update_client(&self, client: &Client) -> Result<()>;

    async fn delete_client(&self, id: Uuid) -> Result<()>;
}

#[async_trait]
pub trait InventoryStore: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>>;

    async fn list_movements(&self) -> Result<Vec<StockMovement>>;

    async fn create_product(&self, product: &Product) -> Result<()>;

    /// Persist the movement and the resulting quantity; returns the product
    /// as stored.
    async fn record_movement(&self, movement: &StockMovement) -> Result<Product>;
}

#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn list_transactions(&self) -> Result<Vec<Transaction>>;

    async fn create_transaction(&self, transaction: &Transaction) -> Result<()>;

    async fn delete_transaction(&self, id: Uuid) -> Result<()>;
}
