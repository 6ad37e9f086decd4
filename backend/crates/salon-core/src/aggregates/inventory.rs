use crate::{CoreError, CoreResult, MovementKind, Product, StockMovement};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;

/// Stock rules applied before a movement is written.
pub struct Inventory;

impl Inventory {
    /// Validate `movement` against `product` and return the product with its
    /// new quantity. Nothing is written; callers persist both together.
    #[track_caller]
    pub fn apply(product: &Product, movement: &StockMovement) -> CoreResult<Product> {
        if movement.product_id != product.id {
            return Err(CoreError::Validation {
                message: format!(
                    "Movement for product {} applied to {}",
                    movement.product_id, product.id
                ),
                field: Some("product_id".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if movement.quantity <= 0 {
            return Err(CoreError::Validation {
                message: format!("Quantity must be positive, got {}", movement.quantity),
                field: Some("quantity".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if movement.kind == MovementKind::Out && movement.quantity > product.quantity {
            return Err(CoreError::InsufficientStock {
                product: product.name.clone(),
                requested: movement.quantity,
                available: product.quantity,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut updated = product.clone();
        updated.quantity += movement.delta();
        // A restock beyond the reference level becomes the new reference.
        if updated.quantity > updated.total_quantity {
            updated.total_quantity = updated.quantity;
        }
        updated.updated_at = Utc::now();

        Ok(updated)
    }
}
