use crate::Result;
use crate::store::{AppointmentStore, CatalogStore, InventoryStore, LedgerStore};

use salon_config::Config;
use salon_core::{
    Appointment, Client, Product, Professional, Service, StockMovement, Transaction,
};
use salon_db::{
    AppointmentRepository, ClientRepository, ProductRepository, ProfessionalRepository,
    ServiceRepository, StockMovementRepository, TenantConnectionManager, TransactionRepository,
};

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sqlx::SqlitePool;
use uuid::Uuid;

/// All four stores over one tenant's SQLite database.
pub struct SqliteStore {
    appointments: AppointmentRepository,
    clients: ClientRepository,
    services: ServiceRepository,
    professionals: ProfessionalRepository,
    products: ProductRepository,
    movements: StockMovementRepository,
    transactions: TransactionRepository,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            appointments: AppointmentRepository::new(pool.clone()),
            clients: ClientRepository::new(pool.clone()),
            services: ServiceRepository::new(pool.clone()),
            professionals: ProfessionalRepository::new(pool.clone()),
            products: ProductRepository::new(pool.clone()),
            movements: StockMovementRepository::new(pool.clone()),
            transactions: TransactionRepository::new(pool),
        }
    }

    /// Connection manager rooted at the configured tenant directory.
    pub fn tenant_manager(config: &Config) -> Result<TenantConnectionManager> {
        Ok(TenantConnectionManager::with_max_connections(
            config.database_path()?,
            config.database.max_connections,
        ))
    }

    /// Store for the signed-in tenant.
    pub async fn for_tenant(manager: &TenantConnectionManager, tenant_id: &str) -> Result<Self> {
        let pool = manager.get_pool(tenant_id).await?;
        debug!("Opened store for tenant {tenant_id}");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl AppointmentStore for SqliteStore {
    async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        Ok(self.appointments.list().await?)
    }

    async fn create_appointment(&self, appointment: &Appointment) -> Result<()> {
        Ok(self.appointments.create(appointment).await?)
    }

    async fn update_appointment(&self, appointment: &Appointment) -> Result<()> {
        Ok(self.appointments.update(appointment).await?)
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<()> {
        Ok(self.appointments.delete(id).await?)
    }
}

#[async_trait]
impl CatalogStore for SqliteStore {
    async fn list_clients(&self) -> Result<Vec<Client>> {
        Ok(self.clients.list().await?)
    }

    async fn list_services(&self) -> Result<Vec<Service>> {
        Ok(self.services.list().await?)
    }

    async fn list_professionals(&self) -> Result<Vec<Professional>> {
        Ok(self.professionals.list().await?)
    }

    async fn create_client(&self, client: &Client) -> Result<()> {
        Ok(self.clients.create(client).await?)
    }

    async fn update_client(&self, client: &Client) -> Result<()> {
        Ok(self.clients.update(client).await?)
    }

    async fn delete_client(&self, id: Uuid) -> Result<()> {
        Ok(self.clients.delete(id, Utc::now().timestamp()).await?)
    }
}

#[async_trait]
impl InventoryStore for SqliteStore {
    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.list().await?)
    }

    async fn list_movements(&self) -> Result<Vec<StockMovement>> {
        Ok(self.movements.list().await?)
    }

    async fn create_product(&self, product: &Product) -> Result<()> {
        Ok(self.products.create(product).await?)
    }

    async fn record_movement(&self, movement: &StockMovement) -> Result<Product> {
        Ok(self.products.apply_movement(movement).await?)
    }
}

#[async_trait]
impl LedgerStore for SqliteStore {
    async fn list_transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.list().await?)
    }

    async fn create_transaction(&self, transaction: &Transaction) -> Result<()> {
        Ok(self.transactions.create(transaction).await?)
    }

    async fn delete_transaction(&self, id: Uuid) -> Result<()> {
        Ok(self.transactions.delete(id, Utc::now().timestamp()).await?)
    }
}
