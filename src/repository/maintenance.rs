//! Maintenance repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{CreateMaintenance, Maintenance},
};

#[derive(Clone)]
pub struct MaintenanceRepository {
    pool: Pool<Postgres>,
}

impl MaintenanceRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all maintenance tickets
    pub async fn list(&self) -> AppResult<Vec<Maintenance>> {
        let rows = sqlx::query_as::<_, Maintenance>("SELECT * FROM maintenance ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List maintenance tickets for a resource
    pub async fn list_by_resource(&self, resource_id: i32) -> AppResult<Vec<Maintenance>> {
        let rows = sqlx::query_as::<_, Maintenance>(
            "SELECT * FROM maintenance WHERE resource_id = $1 ORDER BY id",
        )
        .bind(resource_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a maintenance ticket; status defaults to PENDING
    pub async fn create(&self, data: &CreateMaintenance) -> AppResult<Maintenance> {
        let status = match &data.status {
            Some(s) if !s.is_empty() => s.clone(),
            _ => "PENDING".to_string(),
        };

        let row = sqlx::query_as::<_, Maintenance>(
            r#"
            INSERT INTO maintenance (maintenance_type, scheduled_date, status, notes, resource_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.maintenance_type)
        .bind(data.scheduled_date)
        .bind(status)
        .bind(&data.notes)
        .bind(data.resource_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a ticket's status
    pub async fn update_status(&self, id: i32, status: &str) -> AppResult<Maintenance> {
        sqlx::query_as::<_, Maintenance>(
            "UPDATE maintenance SET status = $1 WHERE id = $2 RETURNING *",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Maintenance {} not found", id)))
    }

    /// Delete a maintenance ticket
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM maintenance WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Maintenance {} not found", id)));
        }
        Ok(())
    }
}
