//! Cupboards repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::cupboard::{CreateCupboard, Cupboard, UpdateCupboard},
};

#[derive(Clone)]
pub struct CupboardsRepository {
    pool: Pool<Postgres>,
}

impl CupboardsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all cupboards
    pub async fn list(&self) -> AppResult<Vec<Cupboard>> {
        let rows = sqlx::query_as::<_, Cupboard>("SELECT * FROM cupboards ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List cupboards inside a resource
    pub async fn list_by_resource(&self, resource_id: i32) -> AppResult<Vec<Cupboard>> {
        let rows = sqlx::query_as::<_, Cupboard>(
            "SELECT * FROM cupboards WHERE resource_id = $1 ORDER BY id",
        )
        .bind(resource_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get cupboard by ID, None when absent
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Cupboard>> {
        let row = sqlx::query_as::<_, Cupboard>("SELECT * FROM cupboards WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create a cupboard
    pub async fn create(&self, data: &CreateCupboard) -> AppResult<Cupboard> {
        let row = sqlx::query_as::<_, Cupboard>(
            r#"
            INSERT INTO cupboards (cupboard_name, total_shelves, resource_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.cupboard_name)
        .bind(data.total_shelves.unwrap_or(0))
        .bind(data.resource_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a cupboard
    pub async fn update(&self, id: i32, data: &UpdateCupboard) -> AppResult<Cupboard> {
        sqlx::query_as::<_, Cupboard>(
            r#"
            UPDATE cupboards
            SET cupboard_name = $1, total_shelves = $2
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&data.cupboard_name)
        .bind(data.total_shelves)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Cupboard {} not found", id)))
    }

    /// Delete a cupboard
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM cupboards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Cupboard {} not found", id)));
        }
        Ok(())
    }
}
