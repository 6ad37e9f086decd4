#![allow(dead_code)]

mod flaky_store;
mod salon;

pub use flaky_store::FlakyStore;
pub use salon::*;
