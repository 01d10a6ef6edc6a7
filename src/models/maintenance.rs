//! Maintenance ticket model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Maintenance ticket for a resource
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Maintenance {
    pub id: i32,
    pub maintenance_type: String,
    pub scheduled_date: Option<NaiveDate>,
    /// Free-form status, defaults to "PENDING"
    pub status: String,
    pub notes: Option<String>,
    pub resource_id: i32,
}

/// Create maintenance request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMaintenance {
    pub maintenance_type: String,
    pub scheduled_date: Option<NaiveDate>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub resource_id: i32,
}

/// Update maintenance status request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMaintenanceStatus {
    pub status: String,
}
