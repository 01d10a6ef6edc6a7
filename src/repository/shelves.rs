//! Shelves repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::shelf::{CreateShelf, Shelf, UpdateShelf},
};

#[derive(Clone)]
pub struct ShelvesRepository {
    pool: Pool<Postgres>,
}

impl ShelvesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all shelves
    pub async fn list(&self) -> AppResult<Vec<Shelf>> {
        let rows = sqlx::query_as::<_, Shelf>("SELECT * FROM shelves ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List shelves inside a cupboard
    pub async fn list_by_cupboard(&self, cupboard_id: i32) -> AppResult<Vec<Shelf>> {
        let rows = sqlx::query_as::<_, Shelf>(
            "SELECT * FROM shelves WHERE cupboard_id = $1 ORDER BY shelf_number",
        )
        .bind(cupboard_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get shelf by ID, None when absent
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Shelf>> {
        let row = sqlx::query_as::<_, Shelf>("SELECT * FROM shelves WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create a shelf
    pub async fn create(&self, data: &CreateShelf) -> AppResult<Shelf> {
        let row = sqlx::query_as::<_, Shelf>(
            r#"
            INSERT INTO shelves (shelf_number, capacity, description, cupboard_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(data.shelf_number)
        .bind(data.capacity.unwrap_or(0))
        .bind(&data.description)
        .bind(data.cupboard_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a shelf
    pub async fn update(&self, id: i32, data: &UpdateShelf) -> AppResult<Shelf> {
        sqlx::query_as::<_, Shelf>(
            r#"
            UPDATE shelves
            SET shelf_number = $1, capacity = $2, description = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(data.shelf_number)
        .bind(data.capacity)
        .bind(&data.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Shelf {} not found", id)))
    }

    /// Delete a shelf
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM shelves WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Shelf {} not found", id)));
        }
        Ok(())
    }
}
