//! Resource management service

use crate::{
    error::{AppError, AppResult},
    models::resource::{CreateResource, Resource, UpdateResource},
    repository::Repository,
};

#[derive(Clone)]
pub struct ResourcesService {
    repository: Repository,
}

impl ResourcesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Resource>> {
        self.repository.resources.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Resource> {
        self.repository.resources.get_by_id(id).await
    }

    /// Create a resource after resolving its building and type
    pub async fn create(&self, data: &CreateResource) -> AppResult<Resource> {
        self.resolve_references(data.building_id, data.resource_type_id).await?;
        self.repository.resources.create(data).await
    }

    /// Update a resource; the building and type may be re-pointed
    pub async fn update(&self, id: i32, data: &UpdateResource) -> AppResult<Resource> {
        self.resolve_references(data.building_id, data.resource_type_id).await?;
        self.repository.resources.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.resources.delete(id).await
    }

    async fn resolve_references(&self, building_id: i32, resource_type_id: i32) -> AppResult<()> {
        self.repository
            .buildings
            .find_by_id(building_id)
            .await?
            .ok_or_else(|| {
                AppError::ReferenceNotFound(format!("Building {} not found", building_id))
            })?;
        self.repository
            .resource_types
            .find_by_id(resource_type_id)
            .await?
            .ok_or_else(|| {
                AppError::ReferenceNotFound(format!("Resource type {} not found", resource_type_id))
            })?;
        Ok(())
    }
}
