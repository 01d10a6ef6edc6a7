//! Cupboard model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Cupboard record, owned by a resource
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Cupboard {
    pub id: i32,
    pub cupboard_name: Option<String>,
    pub total_shelves: i32,
    pub resource_id: i32,
}

/// Create cupboard request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCupboard {
    pub cupboard_name: Option<String>,
    pub total_shelves: Option<i32>,
    pub resource_id: i32,
}

/// Update cupboard request; cupboards do not move between resources
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateCupboard {
    pub cupboard_name: Option<String>,
    pub total_shelves: i32,
}
