use crate::Result;
use crate::rows;

use salon_core::Professional;

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "salon_professionals";

pub struct ProfessionalRepository {
    pool: SqlitePool,
}

impl ProfessionalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, professional: &Professional) -> Result<()> {
        sqlx::query(
            r#"
              INSERT INTO salon_professionals (
                  id, name, specialty, phone, email, active,
                  created_at, updated_at, deleted_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(professional.id.to_string())
        .bind(&professional.name)
        .bind(&professional.specialty)
        .bind(&professional.phone)
        .bind(&professional.email)
        .bind(professional.active)
        .bind(professional.created_at.timestamp())
        .bind(professional.updated_at.timestamp())
        .bind(professional.deleted_at.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Professional>> {
        let row = sqlx::query(
            r#"
              SELECT id, name, specialty, phone, email, active,
                     created_at, updated_at, deleted_at
              FROM salon_professionals
              WHERE id = ? AND deleted_at IS NULL
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    pub async fn list(&self) -> Result<Vec<Professional>> {
        let records = sqlx::query(
            r#"
              SELECT id, name, specialty, phone, email, active,
                     created_at, updated_at, deleted_at
              FROM salon_professionals
              WHERE deleted_at IS NULL
              ORDER BY name COLLATE NOCASE
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        records.iter().map(Self::from_row).collect()
    }

    pub async fn update(&self, professional: &Professional) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE salon_professionals
              SET name = ?, specialty = ?, phone = ?, email = ?, active = ?, updated_at = ?
              WHERE id = ? AND deleted_at IS NULL
              "#,
        )
        .bind(&professional.name)
        .bind(&professional.specialty)
        .bind(&professional.phone)
        .bind(&professional.email)
        .bind(professional.active)
        .bind(professional.updated_at.timestamp())
        .bind(professional.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: Uuid, deleted_at: i64) -> Result<()> {
        sqlx::query(
            r#"
              UPDATE salon_professionals
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

    fn from_row(row: &SqliteRow) -> Result<Professional> {
        Ok(Professional {
            id: rows::uuid(TABLE, &row.try_get::<String, _>("id")?)?,
            name: row.try_get("name")?,
            specialty: row.try_get("specialty")?,
            phone: row.try_get("phone")?,
            email: row.try_get("email")?,
            active: row.try_get("active")?,
            created_at: rows::timestamp(TABLE, row.try_get("created_at")?)?,
            updated_at: rows::timestamp(TABLE, row.try_get("updated_at")?)?,
            deleted_at: rows::opt_timestamp(row.try_get("deleted_at")?),
        })
    }
}
