//! Maintenance ticket service

use crate::{
    error::{AppError, AppResult},
    models::maintenance::{CreateMaintenance, Maintenance},
    repository::Repository,
};

#[derive(Clone)]
pub struct MaintenanceService {
    repository: Repository,
}

impl MaintenanceService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Maintenance>> {
        self.repository.maintenance.list().await
    }

    pub async fn list_by_resource(&self, resource_id: i32) -> AppResult<Vec<Maintenance>> {
        self.repository.maintenance.list_by_resource(resource_id).await
    }

    /// Create a ticket after resolving its resource
    pub async fn create(&self, data: &CreateMaintenance) -> AppResult<Maintenance> {
        self.repository
            .resources
            .find_by_id(data.resource_id)
            .await?
            .ok_or_else(|| {
                AppError::ReferenceNotFound(format!("Resource {} not found", data.resource_id))
            })?;
        self.repository.maintenance.create(data).await
    }

    /// Set a ticket's free-form status
    pub async fn update_status(&self, id: i32, status: &str) -> AppResult<Maintenance> {
        self.repository.maintenance.update_status(id, status).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.maintenance.delete(id).await
    }
}
