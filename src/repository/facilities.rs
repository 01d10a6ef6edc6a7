//! Facilities repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::facility::{CreateFacility, Facility, UpdateFacility},
};

#[derive(Clone)]
pub struct FacilitiesRepository {
    pool: Pool<Postgres>,
}

impl FacilitiesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all facilities
    pub async fn list(&self) -> AppResult<Vec<Facility>> {
        let rows = sqlx::query_as::<_, Facility>("SELECT * FROM facilities ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List facilities attached to a resource
    pub async fn list_by_resource(&self, resource_id: i32) -> AppResult<Vec<Facility>> {
        let rows = sqlx::query_as::<_, Facility>(
            "SELECT * FROM facilities WHERE resource_id = $1 ORDER BY id",
        )
        .bind(resource_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a facility
    pub async fn create(&self, data: &CreateFacility) -> AppResult<Facility> {
        let row = sqlx::query_as::<_, Facility>(
            r#"
            INSERT INTO facilities (facility_name, details, resource_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.facility_name)
        .bind(&data.details)
        .bind(data.resource_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a facility
    pub async fn update(&self, id: i32, data: &UpdateFacility) -> AppResult<Facility> {
        sqlx::query_as::<_, Facility>(
            r#"
            UPDATE facilities
            SET facility_name = $1, details = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&data.facility_name)
        .bind(&data.details)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Facility {} not found", id)))
    }

    /// Delete a facility
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM facilities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Facility {} not found", id)));
        }
        Ok(())
    }
}
