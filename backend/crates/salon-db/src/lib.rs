pub mod connection;
pub mod error;
pub mod repositories;

mod rows;

pub use connection::tenant_connection_manager::TenantConnectionManager;
pub use error::{DbError, Result};
pub use repositories::appointment_repository::AppointmentRepository;
pub use repositories::client_repository::ClientRepository;
pub use repositories::product_repository::ProductRepository;
pub use repositories::professional_repository::ProfessionalRepository;
pub use repositories::service_repository::ServiceRepository;
pub use repositories::stock_movement_repository::StockMovementRepository;
pub use repositories::transaction_repository::TransactionRepository;
