//! Resource (bookable room/space) model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Resource record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Resource {
    pub id: i32,
    pub resource_name: String,
    pub resource_type_id: i32,
    pub building_id: i32,
    pub floor_number: i32,
    pub description: Option<String>,
}

/// Create resource request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateResource {
    pub resource_name: String,
    pub resource_type_id: i32,
    pub building_id: i32,
    pub floor_number: Option<i32>,
    pub description: Option<String>,
}

/// Update resource request (may re-point building and type)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateResource {
    pub resource_name: String,
    pub resource_type_id: i32,
    pub building_id: i32,
    pub floor_number: i32,
    pub description: Option<String>,
}
