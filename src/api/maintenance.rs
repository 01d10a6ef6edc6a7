//! Maintenance API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::maintenance::{CreateMaintenance, Maintenance, UpdateMaintenanceStatus},
};

/// List all maintenance tickets
#[utoipa::path(
    get,
    path = "/maintenance",
    tag = "maintenance",
    responses(
        (status = 200, description = "Maintenance list", body = Vec<Maintenance>)
    )
)]
pub async fn list_maintenance(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Maintenance>>> {
    let tickets = state.services.maintenance.list().await?;
    Ok(Json(tickets))
}

/// List maintenance tickets for a resource
#[utoipa::path(
    get,
    path = "/resources/{id}/maintenance",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Tickets for the resource", body = Vec<Maintenance>)
    )
)]
pub async fn get_maintenance_by_resource(
    State(state): State<crate::AppState>,
    Path(resource_id): Path<i32>,
) -> AppResult<Json<Vec<Maintenance>>> {
    let tickets = state.services.maintenance.list_by_resource(resource_id).await?;
    Ok(Json(tickets))
}

/// Create a maintenance ticket
#[utoipa::path(
    post,
    path = "/maintenance",
    tag = "maintenance",
    request_body = CreateMaintenance,
    responses(
        (status = 201, description = "Ticket created", body = Maintenance),
        (status = 500, description = "Resource not found")
    )
)]
pub async fn create_maintenance(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateMaintenance>,
) -> AppResult<(StatusCode, Json<Maintenance>)> {
    let ticket = state.services.maintenance.create(&data).await?;
    Ok((StatusCode::CREATED, Json(ticket)))
}

/// Update a ticket's status
#[utoipa::path(
    put,
    path = "/maintenance/{id}/status",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Maintenance ID")),
    request_body = UpdateMaintenanceStatus,
    responses(
        (status = 200, description = "Status updated", body = Maintenance),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn update_maintenance_status(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateMaintenanceStatus>,
) -> AppResult<Json<Maintenance>> {
    let ticket = state.services.maintenance.update_status(id, &request.status).await?;
    Ok(Json(ticket))
}

/// Delete a maintenance ticket
#[utoipa::path(
    delete,
    path = "/maintenance/{id}",
    tag = "maintenance",
    params(("id" = i32, Path, description = "Maintenance ID")),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found")
    )
)]
pub async fn delete_maintenance(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.maintenance.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
