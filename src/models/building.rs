//! Building model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Building record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Building {
    pub id: i32,
    pub building_name: String,
    pub building_number: Option<String>,
    /// Number of floors in the building
    pub total_floors: i32,
}

/// Create building request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBuilding {
    pub building_name: String,
    pub building_number: Option<String>,
    pub total_floors: Option<i32>,
}

/// Update building request (full replacement)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBuilding {
    pub building_name: String,
    pub building_number: Option<String>,
    pub total_floors: i32,
}
