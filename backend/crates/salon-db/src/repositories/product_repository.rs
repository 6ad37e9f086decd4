use crate::rows::{self, format_date};
use crate::{DbError, Result};

use salon_core::{ErrorLocation, Inventory, Product, StockMovement};

use std::panic::Location;

use log::info;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "salon_products";

const SELECT_COLUMNS: &str = r#"
    SELECT id, name, category, price_cents, quantity, total_quantity,
           created_at, updated_at, deleted_at
    FROM salon_products
"#;

pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, product: &Product) -> Result<()> {
        sqlx::query(
            r#"
              INSERT INTO salon_products (
                  id, name, category, price_cents, quantity, total_quantity,
                  created_at, updated_at, deleted_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(product.id.to_string())
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price_cents)
        .bind(product.quantity)
        .bind(product.total_quantity)
        .bind(product.created_at.timestamp())
        .bind(product.updated_at.timestamp())
        .bind(product.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ? AND deleted_at IS NULL"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    pub async fn list(&self) -> Result<Vec<Product>> {
        let records = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE deleted_at IS NULL ORDER BY name COLLATE NOCASE"
        ))
        .fetch_all(&self.pool)
        .await?;

        records.iter().map(Self::from_row).collect()
    }

    /// Updates descriptive fields only. Stock changes go through
    /// [`ProductRepository::apply_movement`].
    pub async fn update(&self, product: &Product) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE salon_products
              SET name = ?, category = ?, price_cents = ?, total_quantity = ?, updated_at = ?
              WHERE id = ? AND deleted_at IS NULL
              "#,
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price_cents)
        .bind(product.total_quantity)
        .bind(product.updated_at.timestamp())
        .bind(product.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, deleted_at: i64) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE salon_products
              SET deleted_at = ?
              WHERE id = ? AND deleted_at IS NULL
              "#,
        )
        .bind(deleted_at)
        .bind(id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Write `movement` and the resulting product quantity in one transaction.
    /// Fails without writing anything if the stock rules reject it.
    pub async fn apply_movement(&self, movement: &StockMovement) -> Result<Product> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ? AND deleted_at IS NULL"))
            .bind(movement.product_id.to_string())
            .fetch_optional(&mut *tx)
            .await?;

        let Some(row) = row else {
            return Err(DbError::NotFound {
                entity: "product",
                id: movement.product_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        };

        let product = Self::from_row(&row)?;
        let updated = Inventory::apply(&product, movement)?;

        sqlx::query(
            r#"
              INSERT INTO salon_stock_movements (
                  id, product_id, kind, quantity, reason, date, created_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(movement.id.to_string())
        .bind(movement.product_id.to_string())
        .bind(movement.kind.as_str())
        .bind(movement.quantity)
        .bind(&movement.reason)
        .bind(format_date(movement.date))
        .bind(movement.created_at.timestamp())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
              UPDATE salon_products
              SET quantity = ?, total_quantity = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(updated.quantity)
        .bind(updated.total_quantity)
        .bind(updated.updated_at.timestamp())
        .bind(updated.id.to_string())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            "Stock {} for {}: {} -> {}",
            movement.kind.as_str(),
            updated.name,
            product.quantity,
            updated.quantity
        );

        Ok(updated)
    }

    fn from_row(row: &SqliteRow) -> Result<Product> {
        Ok(Product {
            id: rows::uuid(TABLE, &row.try_get::<String, _>("id")?)?,
            name: row.try_get("name")?,
            category: row.try_get("category")?,
            price_cents: row.try_get("price_cents")?,
            quantity: row.try_get("quantity")?,
            total_quantity: row.try_get("total_quantity")?,
            created_at: rows::timestamp(TABLE, row.try_get("created_at")?)?,
            updated_at: rows::timestamp(TABLE, row.try_get("updated_at")?)?,
            deleted_at: rows::opt_timestamp(row.try_get("deleted_at")?),
        })
    }
}
