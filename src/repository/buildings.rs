//! Buildings repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::building::{Building, CreateBuilding, UpdateBuilding},
};

#[derive(Clone)]
pub struct BuildingsRepository {
    pool: Pool<Postgres>,
}

impl BuildingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all buildings
    pub async fn list(&self) -> AppResult<Vec<Building>> {
        let rows = sqlx::query_as::<_, Building>("SELECT * FROM buildings ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get building by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Building> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Building {} not found", id)))
    }

    /// Get building by ID, None when absent
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Building>> {
        let row = sqlx::query_as::<_, Building>("SELECT * FROM buildings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create a building
    pub async fn create(&self, data: &CreateBuilding) -> AppResult<Building> {
        let row = sqlx::query_as::<_, Building>(
            r#"
            INSERT INTO buildings (building_name, building_number, total_floors)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&data.building_name)
        .bind(&data.building_number)
        .bind(data.total_floors.unwrap_or(1))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a building
    pub async fn update(&self, id: i32, data: &UpdateBuilding) -> AppResult<Building> {
        sqlx::query_as::<_, Building>(
            r#"
            UPDATE buildings
            SET building_name = $1, building_number = $2, total_floors = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(&data.building_name)
        .bind(&data.building_number)
        .bind(data.total_floors)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Building {} not found", id)))
    }

    /// Delete a building
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM buildings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Building {} not found", id)));
        }
        Ok(())
    }
}
