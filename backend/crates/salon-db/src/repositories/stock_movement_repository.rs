use crate::Result;
use crate::rows;

use salon_core::{MovementKind, StockMovement};

use std::str::FromStr;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "salon_stock_movements";

const SELECT_COLUMNS: &str = r#"
    SELECT id, product_id, kind, quantity, reason, date, created_at
    FROM salon_stock_movements
"#;

/// Read access to the stock ledger. Movements are written together with
/// the product quantity by `ProductRepository::apply_movement`.
pub struct StockMovementRepository {
    pool: SqlitePool,
}

impl StockMovementRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<StockMovement>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    pub async fn list(&self) -> Result<Vec<StockMovement>> {
        let records = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY date DESC, created_at DESC"))
            .fetch_all(&self.pool)
            .await?;

        records.iter().map(Self::from_row).collect()
    }

    pub async fn list_by_product(&self, product_id: Uuid) -> Result<Vec<StockMovement>> {
        let records = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE product_id = ? ORDER BY date DESC, created_at DESC"
        ))
        .bind(product_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        records.iter().map(Self::from_row).collect()
    }

    fn from_row(row: &SqliteRow) -> Result<StockMovement> {
        let kind: String = row.try_get("kind")?;

        Ok(StockMovement {
            id: rows::uuid(TABLE, &row.try_get::<String, _>("id")?)?,
            product_id: rows::uuid(TABLE, &row.try_get::<String, _>("product_id")?)?,
            kind: MovementKind::from_str(&kind)?,
            quantity: row.try_get("quantity")?,
            reason: row.try_get("reason")?,
            date: rows::date(TABLE, &row.try_get::<String, _>("date")?)?,
            created_at: rows::timestamp(TABLE, row.try_get("created_at")?)?,
        })
    }
}
