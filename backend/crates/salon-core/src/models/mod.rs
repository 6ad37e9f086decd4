pub mod appointment;
pub mod appointment_status;
pub mod board_column;
pub mod client;
pub mod clock_time;
pub mod movement_kind;
pub mod product;
pub mod professional;
pub mod service;
pub mod stock_movement;
pub mod transaction;
pub mod transaction_kind;
