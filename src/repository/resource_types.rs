//! Resource types repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::resource_type::{CreateResourceType, ResourceType, UpdateResourceType},
};

#[derive(Clone)]
pub struct ResourceTypesRepository {
    pool: Pool<Postgres>,
}

impl ResourceTypesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all resource types
    pub async fn list(&self) -> AppResult<Vec<ResourceType>> {
        let rows = sqlx::query_as::<_, ResourceType>("SELECT * FROM resource_types ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get resource type by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<ResourceType> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resource type {} not found", id)))
    }

    /// Get resource type by ID, None when absent
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<ResourceType>> {
        let row = sqlx::query_as::<_, ResourceType>("SELECT * FROM resource_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create a resource type
    pub async fn create(&self, data: &CreateResourceType) -> AppResult<ResourceType> {
        let row = sqlx::query_as::<_, ResourceType>(
            "INSERT INTO resource_types (type_name) VALUES ($1) RETURNING *",
        )
        .bind(&data.type_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a resource type
    pub async fn update(&self, id: i32, data: &UpdateResourceType) -> AppResult<ResourceType> {
        sqlx::query_as::<_, ResourceType>(
            "UPDATE resource_types SET type_name = $1 WHERE id = $2 RETURNING *",
        )
        .bind(&data.type_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resource type {} not found", id)))
    }

    /// Delete a resource type
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM resource_types WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Resource type {} not found", id)));
        }
        Ok(())
    }
}
