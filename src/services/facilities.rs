//! Facility management service

use crate::{
    error::{AppError, AppResult},
    models::facility::{CreateFacility, Facility, UpdateFacility},
    repository::Repository,
};

#[derive(Clone)]
pub struct FacilitiesService {
    repository: Repository,
}

impl FacilitiesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Facility>> {
        self.repository.facilities.list().await
    }

    pub async fn list_by_resource(&self, resource_id: i32) -> AppResult<Vec<Facility>> {
        self.repository.facilities.list_by_resource(resource_id).await
    }

    /// Create a facility after resolving its resource
    pub async fn create(&self, data: &CreateFacility) -> AppResult<Facility> {
        self.repository
            .resources
            .find_by_id(data.resource_id)
            .await?
            .ok_or_else(|| {
                AppError::ReferenceNotFound(format!("Resource {} not found", data.resource_id))
            })?;
        self.repository.facilities.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateFacility) -> AppResult<Facility> {
        self.repository.facilities.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.facilities.delete(id).await
    }
}
