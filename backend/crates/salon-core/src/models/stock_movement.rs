use crate::MovementKind;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: Uuid,
    pub product_id: Uuid,
    pub kind: MovementKind,
    pub quantity: i32,
    pub reason: Option<String>,
    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

impl StockMovement {
    pub fn new(product_id: Uuid, kind: MovementKind, quantity: i32, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            product_id,
            kind,
            quantity,
            reason: None,
            date,
            created_at: Utc::now(),
        }
    }

    /// Quantity with sign applied to the product's stock.
    pub fn delta(&self) -> i32 {
        match self.kind {
            MovementKind::In => self.quantity,
            MovementKind::Out => -self.quantity,
        }
    }
}
