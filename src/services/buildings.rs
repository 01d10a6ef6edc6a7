//! Building management service

use crate::{
    error::AppResult,
    models::building::{Building, CreateBuilding, UpdateBuilding},
    repository::Repository,
};

#[derive(Clone)]
pub struct BuildingsService {
    repository: Repository,
}

impl BuildingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Building>> {
        self.repository.buildings.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Building> {
        self.repository.buildings.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateBuilding) -> AppResult<Building> {
        self.repository.buildings.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateBuilding) -> AppResult<Building> {
        self.repository.buildings.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.buildings.delete(id).await
    }
}
