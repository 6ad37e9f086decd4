pub mod appointment_repository;
pub mod client_repository;
pub mod product_repository;
pub mod professional_repository;
pub mod service_repository;
pub mod stock_movement_repository;
pub mod transaction_repository;
