use crate::notice::Notice;
use crate::store::InventoryStore;
use crate::{DashboardError, Result};

use salon_core::{Inventory, MovementKind, Product, StockLevel, StockMovement};

use chrono::NaiveDate;
use log::{error, info};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub product: Product,
    pub level: StockLevel,
}

/// Products with their stock buckets, and the movement history.
#[derive(Debug, Clone, Default)]
pub struct InventoryView {
    products: Vec<Product>,
    movements: Vec<StockMovement>,
}

impl InventoryView {
    pub async fn load<S>(store: &S) -> Result<Self>
    where
        S: InventoryStore + ?Sized,
    {
        let (products, movements) =
            tokio::try_join!(store.list_products(), store.list_movements())?;

        Ok(Self {
            products,
            movements,
        })
    }

    pub fn rows(&self) -> Vec<ProductRow> {
        self.products
            .iter()
            .map(|product| ProductRow {
                level: product.stock_level(),
                product: product.clone(),
            })
            .collect()
    }

    /// Products at or below half their reference quantity.
    pub fn restock_list(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.stock_level().needs_restock())
            .collect()
    }

    pub fn movements(&self) -> &[StockMovement] {
        &self.movements
    }

    pub fn movements_for(&self, product_id: Uuid) -> Vec<&StockMovement> {
        self.movements
            .iter()
            .filter(|m| m.product_id == product_id)
            .collect()
    }

    pub async fn add_product<S>(&mut self, store: &S, product: Product) -> std::result::Result<(), Notice>
    where
        S: InventoryStore + ?Sized,
    {
        if product.name.trim().is_empty() {
            let e = DashboardError::validation("Product name is required", "name");
            return Err(Notice::from_error(&e));
        }

        if let Err(e) = store.create_product(&product).await {
            error!("Failed to create product {}: {}", product.name, e);
            return Err(Notice::from_error(&e));
        }

        self.products.push(product);
        Ok(())
    }

    pub async fn sell<S>(
        &mut self,
        store: &S,
        product_id: Uuid,
        quantity: i32,
        date: NaiveDate,
    ) -> std::result::Result<Product, Notice>
    where
        S: InventoryStore + ?Sized,
    {
        self.move_stock(store, StockMovement::new(product_id, MovementKind::Out, quantity, date))
            .await
    }

    pub async fn restock<S>(
        &mut self,
        store: &S,
        product_id: Uuid,
        quantity: i32,
        date: NaiveDate,
    ) -> std::result::Result<Product, Notice>
    where
        S: InventoryStore + ?Sized,
    {
        self.move_stock(store, StockMovement::new(product_id, MovementKind::In, quantity, date))
            .await
    }

    /// Stock rules are checked against the loaded quantity before anything
    /// is written; the store checks again inside its transaction.
    async fn move_stock<S>(
        &mut self,
        store: &S,
        movement: StockMovement,
    ) -> std::result::Result<Product, Notice>
    where
        S: InventoryStore + ?Sized,
    {
        let Some(current) = self.products.iter().find(|p| p.id == movement.product_id) else {
            let e = DashboardError::not_found("product", movement.product_id);
            return Err(Notice::from_error(&e));
        };

        if let Err(e) = Inventory::apply(current, &movement) {
            return Err(Notice::from_error(&DashboardError::from(e)));
        }

        let stored = match store.record_movement(&movement).await {
            Ok(product) => product,
            Err(e) => {
                error!("Failed to record stock movement for {}: {}", movement.product_id, e);
                return Err(Notice::from_error(&e));
            }
        };

        info!(
            "Stock for {} is now {} ({:?})",
            stored.name,
            stored.quantity,
            stored.stock_level()
        );

        if let Some(slot) = self.products.iter_mut().find(|p| p.id == stored.id) {
            *slot = stored.clone();
        }
        self.movements.insert(0, movement);

        Ok(stored)
    }
}
