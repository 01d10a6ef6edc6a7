//! Facility model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Facility record (amenity attached to a resource, e.g. projector)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Facility {
    pub id: i32,
    pub resource_id: i32,
    pub facility_name: String,
    pub details: Option<String>,
}

/// Create facility request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateFacility {
    pub facility_name: String,
    pub details: Option<String>,
    pub resource_id: i32,
}

/// Update facility request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateFacility {
    pub facility_name: String,
    pub details: Option<String>,
}
