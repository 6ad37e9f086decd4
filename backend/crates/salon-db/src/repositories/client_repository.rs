use crate::rows::{self, format_date};
use crate::Result;

use salon_core::Client;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "salon_clients";

pub struct ClientRepository {
    pool: SqlitePool,
}

impl ClientRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, client: &Client) -> Result<()> {
        sqlx::query(
            r#"
              INSERT INTO salon_clients (
                  id, name, phone, email, birth_date, notes,
                  created_at, updated_at, deleted_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(client.id.to_string())
        .bind(&client.name)
        .bind(&client.phone)
        .bind(&client.email)
        .bind(client.birth_date.map(format_date))
        .bind(&client.notes)
        .bind(client.created_at.timestamp())
        .bind(client.updated_at.timestamp())
        .bind(client.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Client>> {
        let row = sqlx::query(
            r#"
              SELECT id, name, phone, email, birth_date, notes,
                     created_at, updated_at, deleted_at
              FROM salon_clients
              WHERE id = ? AND deleted_at IS NULL
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    pub async fn list(&self) -> Result<Vec<Client>> {
        let records = sqlx::query(
            r#"
              SELECT id, name, phone, email, birth_date, notes,
                     created_at, updated_at, deleted_at
              FROM salon_clients
              WHERE deleted_at IS NULL
              ORDER BY name COLLATE NOCASE
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        records.iter().map(Self::from_row).collect()
    }

    pub async fn update(&self, client: &Client) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE salon_clients
              SET name = ?, phone = ?, email = ?, birth_date = ?, notes = ?, updated_at = ?
              WHERE id = ? AND deleted_at IS NULL
              "#,
        )
        .bind(&client.name)
        .bind(&client.phone)
        .bind(&client.email)
        .bind(client.birth_date.map(format_date))
        .bind(&client.notes)
        .bind(client.updated_at.timestamp())
        .bind(client.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, deleted_at: i64) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE salon_clients
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

    fn from_row(row: &SqliteRow) -> Result<Client> {
        Ok(Client {
            id: rows::uuid(TABLE, &row.try_get::<String, _>("id")?)?,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            birth_date: rows::opt_date(TABLE, row.try_get("birth_date")?)?,
            notes: row.try_get("notes")?,
            created_at: rows::timestamp(TABLE, row.try_get("created_at")?)?,
            updated_at: rows::timestamp(TABLE, row.try_get("updated_at")?)?,
            deleted_at: rows::opt_timestamp(row.try_get("deleted_at")?),
        })
    }
}
