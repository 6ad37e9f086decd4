pub mod board_card;
pub mod calendar_entry;
pub mod catalog;
pub mod projection;
