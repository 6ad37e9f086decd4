use salon_core::{Appointment, Client, ClockTime, Product, Professional, Service};
use salon_db::{ClientRepository, ProfessionalRepository, ServiceRepository};

use chrono::NaiveDate;
use sqlx::SqlitePool;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

pub fn time(h: u32, m: u32) -> ClockTime {
    ClockTime::new(h, m).expect("valid test time")
}

/// One client, one professional and two services stored in the pool.
pub struct SeededCatalog {
    pub client: Client,
    pub professional: Professional,
    pub cut: Service,
    pub blow_dry: Service,
}

impl SeededCatalog {
    pub fn appointment(&self, on: NaiveDate, at: ClockTime) -> Appointment {
        Appointment::new(
            self.client.id,
            self.professional.id,
            vec![self.cut.id, self.blow_dry.id],
            on,
            at,
        )
    }
}

pub async fn seed_catalog(pool: &SqlitePool) -> SeededCatalog {
    let client = Client::new("Ana Souza".to_string());
    let professional = Professional::new("Carla".to_string());
    let cut = Service::new("Corte".to_string(), 60, 8000);
    let blow_dry = Service::new("Escova".to_string(), 30, 4500);

    ClientRepository::new(pool.clone())
        .create(&client)
        .await
        .expect("Failed to seed client");
    ProfessionalRepository::new(pool.clone())
        .create(&professional)
        .await
        .expect("Failed to seed professional");
    let services = ServiceRepository::new(pool.clone());
    services.create(&cut).await.expect("Failed to seed service");
    services
        .create(&blow_dry)
        .await
        .expect("Failed to seed service");

    SeededCatalog {
        client,
        professional,
        cut,
        blow_dry,
    }
}

pub fn create_test_product(quantity: i32, total_quantity: i32) -> Product {
    let mut product = Product::new("Shampoo".to_string(), 3500, total_quantity);
    product.quantity = quantity;
    product
}
