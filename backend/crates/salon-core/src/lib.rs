pub mod aggregates;
pub mod board;
pub mod directive;
pub mod error;
pub mod models;
pub mod schedule;

#[cfg(test)]
mod tests;

pub use aggregates::client_totals::ClientTotals;
pub use aggregates::finance_summary::FinanceSummary;
pub use aggregates::inventory::Inventory;
pub use aggregates::stock_level::StockLevel;
pub use board::board_card::BoardCard;
pub use board::calendar_entry::CalendarEntry;
pub use board::catalog::{Catalog, ResolvedAppointment};
pub use board::projection::{build_board, build_bookings, build_calendar, plan_edit, plan_move};
pub use error::{CoreError, Result as CoreResult};
pub use models::appointment::Appointment;
pub use models::appointment_status::AppointmentStatus;
pub use models::board_column::BoardColumn;
pub use models::client::Client;
pub use models::clock_time::ClockTime;
pub use models::movement_kind::MovementKind;
pub use models::product::Product;
pub use models::professional::Professional;
pub use models::service::Service;
pub use models::stock_movement::StockMovement;
pub use models::transaction::Transaction;
pub use models::transaction_kind::TransactionKind;
pub use schedule::conflict::{Booking, Candidate, find_conflict, has_conflict};
pub use schedule::date_range::{DateRangePreset, MonthCursor, week_bounds};
pub use schedule::filter::{AppointmentFilter, StatusFilter};

pub use error_location::ErrorLocation;
