//! Resource type management service

use crate::{
    error::AppResult,
    models::resource_type::{CreateResourceType, ResourceType, UpdateResourceType},
    repository::Repository,
};

#[derive(Clone)]
pub struct ResourceTypesService {
    repository: Repository,
}

impl ResourceTypesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<ResourceType>> {
        self.repository.resource_types.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<ResourceType> {
        self.repository.resource_types.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateResourceType) -> AppResult<ResourceType> {
        self.repository.resource_types.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateResourceType) -> AppResult<ResourceType> {
        self.repository.resource_types.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.resource_types.delete(id).await
    }
}
