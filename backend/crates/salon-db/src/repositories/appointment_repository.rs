use crate::rows::{self, format_date};
use crate::{DbError, Result};

use salon_core::{Appointment, AppointmentStatus, ClockTime, ErrorLocation, directive};

use std::collections::HashMap;
use std::panic::Location;
use std::str::FromStr;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

const TABLE: &str = "salon_appointments";

const SELECT_COLUMNS: &str = r#"
    SELECT id, client_id, professional_id, date, start_time, status, notes,
           created_at, updated_at
    FROM salon_appointments
"#;

pub struct AppointmentRepository {
    pool: SqlitePool,
}

impl AppointmentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, appointment: &Appointment) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
              INSERT INTO salon_appointments (
                  id, client_id, professional_id, date, start_time, status, notes,
                  created_at, updated_at
              ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(appointment.id.to_string())
        .bind(appointment.client_id.to_string())
        .bind(appointment.professional_id.to_string())
        .bind(format_date(appointment.date))
        .bind(appointment.start_time.to_string())
        .bind(appointment.status.as_str())
        .bind(Self::stored_notes(appointment))
        .bind(appointment.created_at.timestamp())
        .bind(appointment.updated_at.timestamp())
        .execute(&mut *tx)
        .await?;

        Self::replace_services(&mut tx, appointment).await?;
        tx.commit().await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Appointment>> {
        let id_str = id.to_string();

        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(&id_str)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let service_rows = sqlx::query(
            r#"
              SELECT service_id FROM salon_appointment_services
              WHERE appointment_id = ?
              ORDER BY position
              "#,
        )
        .bind(&id_str)
        .fetch_all(&self.pool)
        .await?;

        let service_ids = service_rows
            .iter()
            .map(|r| rows::uuid(TABLE, &r.try_get::<String, _>("service_id")?))
            .collect::<Result<Vec<_>>>()?;

        Self::from_row(&row, service_ids).map(Some)
    }

    /// Every appointment, ordered by date and start time.
    pub async fn list(&self) -> Result<Vec<Appointment>> {
        let records = sqlx::query(SELECT_COLUMNS).fetch_all(&self.pool).await?;
        self.hydrate(records).await
    }

    /// Appointments with `from <= date <= to`.
    pub async fn list_by_date_range(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<Appointment>> {
        let records = sqlx::query(&format!("{SELECT_COLUMNS} WHERE date BETWEEN ? AND ?"))
            .bind(format_date(from))
            .bind(format_date(to))
            .fetch_all(&self.pool)
            .await?;
        self.hydrate(records).await
    }

    pub async fn update(&self, appointment: &Appointment) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
              UPDATE salon_appointments
              SET client_id = ?, professional_id = ?, date = ?, start_time = ?,
                  status = ?, notes = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(appointment.client_id.to_string())
        .bind(appointment.professional_id.to_string())
        .bind(format_date(appointment.date))
        .bind(appointment.start_time.to_string())
        .bind(appointment.status.as_str())
        .bind(Self::stored_notes(appointment))
        .bind(appointment.updated_at.timestamp())
        .bind(appointment.id.to_string())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: "appointment",
                id: appointment.id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Self::replace_services(&mut tx, appointment).await?;
        tx.commit().await?;

        Ok(())
    }

    /// Hard delete. Cancelling is a status change, not a delete.
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM salon_appointments WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                entity: "appointment",
                id: id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }

    fn stored_notes(appointment: &Appointment) -> Option<String> {
        directive::encode(
            appointment.notes.as_deref(),
            appointment.board_column_override,
        )
    }

    async fn replace_services(
        tx: &mut Transaction<'_, Sqlite>,
        appointment: &Appointment,
    ) -> Result<()> {
        let id = appointment.id.to_string();

        sqlx::query("DELETE FROM salon_appointment_services WHERE appointment_id = ?")
            .bind(&id)
            .execute(&mut **tx)
            .await?;

        for (position, service_id) in appointment.service_ids.iter().enumerate() {
            sqlx::query(
                r#"
                  INSERT INTO salon_appointment_services (appointment_id, service_id, position)
                  VALUES (?, ?, ?)
                  "#,
            )
            .bind(&id)
            .bind(service_id.to_string())
            .bind(position as i64)
            .execute(&mut **tx)
            .await?;
        }

        Ok(())
    }

    async fn hydrate(&self, records: Vec<SqliteRow>) -> Result<Vec<Appointment>> {
        let service_rows = sqlx::query(
            r#"
              SELECT appointment_id, service_id FROM salon_appointment_services
              ORDER BY appointment_id, position
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut services: HashMap<String, Vec<Uuid>> = HashMap::new();
        for row in &service_rows {
            let appointment_id: String = row.try_get("appointment_id")?;
            let service_id: String = row.try_get("service_id")?;
            services
                .entry(appointment_id)
                .or_default()
                .push(rows::uuid(TABLE, &service_id)?);
        }

        let mut appointments = records
            .iter()
            .map(|row| {
                let id: String = row.try_get("id")?;
                let service_ids = services.remove(&id).unwrap_or_default();
                Self::from_row(row, service_ids)
            })
            .collect::<Result<Vec<_>>>()?;

        appointments.sort_by_key(|a| (a.date, a.start_time));
        Ok(appointments)
    }

    fn from_row(row: &SqliteRow, service_ids: Vec<Uuid>) -> Result<Appointment> {
        let status: String = row.try_get("status")?;
        let start_time: String = row.try_get("start_time")?;
        let stored_notes: Option<String> = row.try_get("notes")?;
        let (notes, board_column_override) = directive::decode(stored_notes.as_deref());

        Ok(Appointment {
            id: rows::uuid(TABLE, &row.try_get::<String, _>("id")?)?,
            client_id: rows::uuid(TABLE, &row.try_get::<String, _>("client_id")?)?,
            professional_id: rows::uuid(TABLE, &row.try_get::<String, _>("professional_id")?)?,
            service_ids,
            date: rows::date(TABLE, &row.try_get::<String, _>("date")?)?,
            start_time: ClockTime::from_str(&start_time)?,
            // Legacy English values are normalized here
            status: AppointmentStatus::from_str(&status)?,
            notes,
            board_column_override,
            created_at: rows::timestamp(TABLE, row.try_get("created_at")?)?,
            updated_at: rows::timestamp(TABLE, row.try_get("updated_at")?)?,
        })
    }
}
