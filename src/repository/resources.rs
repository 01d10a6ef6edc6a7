//! Resources repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::resource::{CreateResource, Resource, UpdateResource},
};

#[derive(Clone)]
pub struct ResourcesRepository {
    pool: Pool<Postgres>,
}

impl ResourcesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all resources
    pub async fn list(&self) -> AppResult<Vec<Resource>> {
        let rows = sqlx::query_as::<_, Resource>("SELECT * FROM resources ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get resource by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Resource> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Resource {} not found", id)))
    }

    /// Get resource by ID, None when absent
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Resource>> {
        let row = sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Create a resource
    pub async fn create(&self, data: &CreateResource) -> AppResult<Resource> {
        let row = sqlx::query_as::<_, Resource>(
            r#"
            INSERT INTO resources (resource_name, resource_type_id, building_id, floor_number, description)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&data.resource_name)
        .bind(data.resource_type_id)
        .bind(data.building_id)
        .bind(data.floor_number.unwrap_or(0))
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a resource
    pub async fn update(&self, id: i32, data: &UpdateResource) -> AppResult<Resource> {
        sqlx::query_as::<_, Resource>(
            r#"
            UPDATE resources
            SET resource_name = $1, resource_type_id = $2, building_id = $3,
                floor_number = $4, description = $5
            WHERE id = $6
            RETURNING *
            "#,
        )
        .bind(&data.resource_name)
        .bind(data.resource_type_id)
        .bind(data.building_id)
        .bind(data.floor_number)
        .bind(&data.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resource {} not found", id)))
    }

    /// Delete a resource
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM resources WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Resource {} not found", id)));
        }
        Ok(())
    }
}
