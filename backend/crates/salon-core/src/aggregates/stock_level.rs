use serde::{Deserialize, Serialize};

/// Stock bucket relative to a product's reference quantity.
///
/// The boundary sits at exactly half the reference quantity. Comparison is
/// done on integers (`2 * quantity` against `total`) so "exactly half" is
/// exact rather than approximate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    OutOfStock,
    Low,
    Half,
    Adequate,
}

impl StockLevel {
    pub fn classify(quantity: i32, total_quantity: i32) -> Self {
        if quantity <= 0 {
            return Self::OutOfStock;
        }
        if total_quantity <= 0 {
            return Self::Adequate;
        }

        let doubled = 2 * i64::from(quantity);
        let total = i64::from(total_quantity);

        match doubled.cmp(&total) {
            std::cmp::Ordering::Less => Self::Low,
            std::cmp::Ordering::Equal => Self::Half,
            std::cmp::Ordering::Greater => Self::Adequate,
        }
    }

    pub fn needs_restock(&self) -> bool {
        matches!(self, Self::OutOfStock | Self::Low)
    }
}
