use crate::Result;
use crate::rows;

use salon_core::Service;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "salon_services";

pub struct ServiceRepository {
    pool: SqlitePool,
}

impl ServiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, service: &Service) -> Result<()> {
        sqlx::query(
            r#"
              INSERT INTO salon_services (
                  id, name, description, duration_minutes, price_cents, active,
                  created_at, updated_at, deleted_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(service.id.to_string())
        .bind(&service.name)
        .bind(&service.description)
        .bind(i64::from(service.duration_minutes))
        .bind(service.price_cents)
        .bind(service.active)
        .bind(service.created_at.timestamp())
        .bind(service.updated_at.timestamp())
        .bind(service.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Service>> {
        let row = sqlx::query(
            r#"
              SELECT id, name, description, duration_minutes, price_cents, active,
                     created_at, updated_at, deleted_at
              FROM salon_services
              WHERE id = ? AND deleted_at IS NULL
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    /// Includes inactive services; existing appointments still reference them.
    pub async fn list(&self) -> Result<Vec<Service>> {
        let records = sqlx::query(
            r#"
              SELECT id, name, description, duration_minutes, price_cents, active,
                     created_at, updated_at, deleted_at
              FROM salon_services
              WHERE deleted_at IS NULL
              ORDER BY name COLLATE NOCASE
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        records.iter().map(Self::from_row).collect()
    }

    pub async fn update(&self, service: &Service) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE salon_services
              SET name = ?, description = ?, duration_minutes = ?, price_cents = ?,
                  active = ?, updated_at = ?
              WHERE id = ? AND deleted_at IS NULL
              "#,
        )
        .bind(&service.name)
        .bind(&service.description)
        .bind(i64::from(service.duration_minutes))
        .bind(service.price_cents)
        .bind(service.active)
        .bind(service.updated_at.timestamp())
        .bind(service.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, deleted_at: i64) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE salon_services
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

    fn from_row(row: &SqliteRow) -> Result<Service> {
        Ok(Service {
            id: rows::uuid(TABLE, &row.try_get::<String, _>("id")?)?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            duration_minutes: rows::unsigned(TABLE, row.try_get("duration_minutes")?)?,
            price_cents: row.try_get("price_cents")?,
            active: row.try_get("active")?,
            created_at: rows::timestamp(TABLE, row.try_get("created_at")?)?,
            updated_at: rows::timestamp(TABLE, row.try_get("updated_at")?)?,
            deleted_at: rows::opt_timestamp(row.try_get("deleted_at")?),
        })
    }
}
