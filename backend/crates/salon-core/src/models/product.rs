use crate::StockLevel;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Retail or back-bar product tracked in inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    /// Sale price in cents
    pub price_cents: i64,
    /// Units currently on hand
    pub quantity: i32,
    /// Reference stock level the thresholds are measured against
    pub total_quantity: i32,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Product {
    pub fn new(name: String, price_cents: i64, total_quantity: i32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            category: None,
            price_cents,
            quantity: total_quantity,
            total_quantity,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn stock_level(&self) -> StockLevel {
        StockLevel::classify(self.quantity, self.total_quantity)
    }
}
