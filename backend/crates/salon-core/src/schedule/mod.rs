pub mod conflict;
pub mod date_range;
pub mod filter;
