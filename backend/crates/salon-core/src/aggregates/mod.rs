pub mod client_totals;
pub mod finance_summary;
pub mod inventory;
pub mod stock_level;
