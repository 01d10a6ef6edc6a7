//! Cupboard management service

use crate::{
    error::{AppError, AppResult},
    models::cupboard::{CreateCupboard, Cupboard, UpdateCupboard},
    repository::Repository,
};

#[derive(Clone)]
pub struct CupboardsService {
    repository: Repository,
}

impl CupboardsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Cupboard>> {
        self.repository.cupboards.list().await
    }

    pub async fn list_by_resource(&self, resource_id: i32) -> AppResult<Vec<Cupboard>> {
        self.repository.cupboards.list_by_resource(resource_id).await
    }

    /// Create a cupboard after resolving its owning resource
    pub async fn create(&self, data: &CreateCupboard) -> AppResult<Cupboard> {
        self.repository
            .resources
            .find_by_id(data.resource_id)
            .await?
            .ok_or_else(|| {
                AppError::ReferenceNotFound(format!("Resource {} not found", data.resource_id))
            })?;
        self.repository.cupboards.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateCupboard) -> AppResult<Cupboard> {
        self.repository.cupboards.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.cupboards.delete(id).await
    }
}
