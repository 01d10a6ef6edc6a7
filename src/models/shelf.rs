//! Shelf model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Shelf record, owned by a cupboard
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Shelf {
    pub id: i32,
    pub shelf_number: i32,
    pub capacity: i32,
    pub description: Option<String>,
    pub cupboard_id: i32,
}

/// Create shelf request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShelf {
    pub shelf_number: i32,
    pub capacity: Option<i32>,
    pub description: Option<String>,
    pub cupboard_id: i32,
}

/// Update shelf request; shelves do not move between cupboards
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateShelf {
    pub shelf_number: i32,
    pub capacity: i32,
    pub description: Option<String>,
}
