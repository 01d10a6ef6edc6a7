//! Resource type model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Resource type record (e.g. lecture hall, lab, storage room)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ResourceType {
    pub id: i32,
    pub type_name: String,
}

/// Create resource type request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateResourceType {
    pub type_name: String,
}

/// Update resource type request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateResourceType {
    pub type_name: String,
}
