use salon_core::{Appointment, Client, ClockTime, Product, Professional, Service};
use salon_dashboard::{CatalogStore, InventoryStore, SqliteStore};
use salon_db::{ProfessionalRepository, ServiceRepository, TenantConnectionManager};

use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use uuid::Uuid;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn time(h: u32, m: u32) -> ClockTime {
    ClockTime::new(h, m).expect("valid test time")
}

/// Monday
pub fn today() -> NaiveDate {
    date(2024, 6, 10)
}

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    TenantConnectionManager::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub struct Salon {
    pub pool: SqlitePool,
    pub store: SqliteStore,
    pub ana: Client,
    pub bia: Client,
    pub carla: Professional,
    pub duda: Professional,
    pub cut: Service,
    pub blow_dry: Service,
}

impl Salon {
    pub async fn open() -> Self {
        let pool = create_test_pool().await;
        let store = SqliteStore::new(pool.clone());

        let ana = Client::new("Ana Souza".to_string());
        let bia = Client::new("Beatriz Lima".to_string());
        store.create_client(&ana).await.expect("seed client");
        store.create_client(&bia).await.expect("seed client");

        let carla = Professional::new("Carla".to_string());
        let duda = Professional::new("Duda".to_string());
        let professionals = ProfessionalRepository::new(pool.clone());
        professionals.create(&carla).await.expect("seed professional");
        professionals.create(&duda).await.expect("seed professional");

        let cut = Service::new("Corte".to_string(), 60, 8000);
        let blow_dry = Service::new("Escova".to_string(), 30, 4500);
        let services = ServiceRepository::new(pool.clone());
        services.create(&cut).await.expect("seed service");
        services.create(&blow_dry).await.expect("seed service");

        Self {
            pool,
            store,
            ana,
            bia,
            carla,
            duda,
            cut,
            blow_dry,
        }
    }

    /// Unsaved appointment for Ana with Carla.
    pub fn appointment(&self, on: NaiveDate, at: ClockTime, service: &Service) -> Appointment {
        Appointment::new(self.ana.id, self.carla.id, vec![service.id], on, at)
    }

    pub async fn book(&self, appointment: &Appointment) {
        salon_db::AppointmentRepository::new(self.pool.clone())
            .create(appointment)
            .await
            .expect("seed appointment");
    }

    pub async fn stock(&self, name: &str, quantity: i32, total_quantity: i32) -> Product {
        let mut product = Product::new(name.to_string(), 3500, total_quantity);
        product.quantity = quantity;
        self.store
            .create_product(&product)
            .await
            .expect("seed product");
        product
    }

    pub fn ids(appointments: &[Appointment]) -> Vec<Uuid> {
        appointments.iter().map(|a| a.id).collect()
    }
}
