//! Shelf management service

use crate::{
    error::{AppError, AppResult},
    models::shelf::{CreateShelf, Shelf, UpdateShelf},
    repository::Repository,
};

#[derive(Clone)]
pub struct ShelvesService {
    repository: Repository,
}

impl ShelvesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Shelf>> {
        self.repository.shelves.list().await
    }

    pub async fn list_by_cupboard(&self, cupboard_id: i32) -> AppResult<Vec<Shelf>> {
        self.repository.shelves.list_by_cupboard(cupboard_id).await
    }

    /// Create a shelf after resolving its owning cupboard
    pub async fn create(&self, data: &CreateShelf) -> AppResult<Shelf> {
        self.repository
            .cupboards
            .find_by_id(data.cupboard_id)
            .await?
            .ok_or_else(|| {
                AppError::ReferenceNotFound(format!("Cupboard {} not found", data.cupboard_id))
            })?;
        self.repository.shelves.create(data).await
    }

    pub async fn update(&self, id: i32, data: &UpdateShelf) -> AppResult<Shelf> {
        self.repository.shelves.update(id, data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.shelves.delete(id).await
    }
}
