//! Page-state layer of the salon dashboard: loads a tenant's collections,
//! derives the calendar, board, directory, inventory and ledger views, and
//! runs the booking dialog and optimistic board-move rules on top of them.

pub mod board_update;
pub mod booking_dialog;
pub mod client_directory;
pub mod error;
pub mod inventory_view;
pub mod ledger_view;
pub mod logger;
pub mod notice;
pub mod schedule_view;
pub mod sqlite_store;
pub mod store;

pub use board_update::{BoardUpdate, CardMove};
pub use booking_dialog::BookingDialog;
pub use client_directory::{ClientDirectory, ClientRow};
pub use error::{DashboardError, Result};
pub use inventory_view::{InventoryView, ProductRow};
pub use ledger_view::LedgerView;
pub use notice::{Notice, NoticeKind};
pub use schedule_view::ScheduleView;
pub use sqlite_store::SqliteStore;
pub use store::{AppointmentStore, CatalogStore, InventoryStore, LedgerStore};
