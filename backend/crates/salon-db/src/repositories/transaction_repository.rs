use crate::Result;
use crate::rows::{self, format_date};

use salon_core::{Transaction, TransactionKind};

use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "salon_transactions";

const SELECT_COLUMNS: &str = r#"
    SELECT id, kind, amount_cents, description, category, payment_method, date,
           client_id, appointment_id, created_at, updated_at, deleted_at
    FROM salon_transactions
"#;

pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, transaction: &Transaction) -> Result<()> {
        sqlx::query(
            r#"
              INSERT INTO salon_transactions (
                  id, kind, amount_cents, description, category, payment_method, date,
                  client_id, appointment_id, created_at, updated_at, deleted_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(transaction.id.to_string())
        .bind(transaction.kind.as_str())
        .bind(transaction.amount_cents)
        .bind(&transaction.description)
        .bind(&transaction.category)
        .bind(&transaction.payment_method)
        .bind(format_date(transaction.date))
        .bind(transaction.client_id.map(|id| id.to_string()))
        .bind(transaction.appointment_id.map(|id| id.to_string()))
        .bind(transaction.created_at.timestamp())
        .bind(transaction.updated_at.timestamp())
        .bind(transaction.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Transaction>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ? AND deleted_at IS NULL"))
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    /// Newest first.
    pub async fn list(&self) -> Result<Vec<Transaction>> {
        let records = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE deleted_at IS NULL ORDER BY date DESC, created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        records.iter().map(Self::from_row).collect()
    }

    pub async fn list_by_date_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Transaction>> {
        let records = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE deleted_at IS NULL AND date BETWEEN ? AND ? \
             ORDER BY date DESC, created_at DESC"
        ))
        .bind(format_date(from))
        .bind(format_date(to))
        .fetch_all(&self.pool)
        .await?;

        records.iter().map(Self::from_row).collect()
    }

    pub async fn list_by_client(&self, client_id: Uuid) -> Result<Vec<Transaction>> {
        let records = sqlx::query(&format!(
            "{SELECT_COLUMNS} WHERE deleted_at IS NULL AND client_id = ? \
             ORDER BY date DESC, created_at DESC"
        ))
        .bind(client_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        records.iter().map(Self::from_row).collect()
    }

    pub async fn update(&self, transaction: &Transaction) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE salon_transactions
              SET kind = ?, amount_cents = ?, description = ?, category = ?,
                  payment_method = ?, date = ?, client_id = ?, appointment_id = ?,
                  updated_at = ?
              WHERE id = ? AND deleted_at IS NULL
              "#,
        )
        .bind(transaction.kind.as_str())
        .bind(transaction.amount_cents)
        .bind(&transaction.description)
        .bind(&transaction.category)
        .bind(&transaction.payment_method)
        .bind(format_date(transaction.date))
        .bind(transaction.client_id.map(|id| id.to_string()))
        .bind(transaction.appointment_id.map(|id| id.to_string()))
        .bind(transaction.updated_at.timestamp())
        .bind(transaction.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, deleted_at: i64) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE salon_transactions
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

    fn from_row(row: &SqliteRow) -> Result<Transaction> {
        let kind: String = row.try_get("kind")?;

        Ok(Transaction {
            id: rows::uuid(TABLE, &row.try_get::<String, _>("id")?)?,
            kind: TransactionKind::from_str(&kind)?,
            amount_cents: row.try_get("amount_cents")?,
            description: row.try_get("description")?,
            category: row.try_get("category")?,
            payment_method: row.try_get("payment_method")?,
            date: rows::date(TABLE, &row.try_get::<String, _>("date")?)?,
            client_id: rows::opt_uuid(TABLE, row.try_get("client_id")?)?,
            appointment_id: rows::opt_uuid(TABLE, row.try_get("appointment_id")?)?,
            created_at: rows::timestamp(TABLE, row.try_get("created_at")?)?,
            updated_at: rows::timestamp(TABLE, row.try_get("updated_at")?)?,
            deleted_at: rows::opt_timestamp(row.try_get("deleted_at")?),
        })
    }
}
