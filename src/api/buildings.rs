//! Building API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::building::{Building, CreateBuilding, UpdateBuilding},
};

/// List all buildings
#[utoipa::path(
    get,
    path = "/buildings",
    tag = "buildings",
    responses(
        (status = 200, description = "Building list", body = Vec<Building>)
    )
)]
pub async fn list_buildings(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Building>>> {
    let buildings = state.services.buildings.list().await?;
    Ok(Json(buildings))
}

/// Get building by ID
#[utoipa::path(
    get,
    path = "/buildings/{id}",
    tag = "buildings",
    params(("id" = i32, Path, description = "Building ID")),
    responses(
        (status = 200, description = "Building details", body = Building),
        (status = 404, description = "Building not found")
    )
)]
pub async fn get_building(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Building>> {
    let building = state.services.buildings.get_by_id(id).await?;
    Ok(Json(building))
}

/// Create a building
#[utoipa::path(
    post,
    path = "/buildings",
    tag = "buildings",
    request_body = CreateBuilding,
    responses(
        (status = 201, description = "Building created", body = Building)
    )
)]
pub async fn create_building(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateBuilding>,
) -> AppResult<(StatusCode, Json<Building>)> {
    let building = state.services.buildings.create(&data).await?;
    Ok((StatusCode::CREATED, Json(building)))
}

/// Update a building
#[utoipa::path(
    put,
    path = "/buildings/{id}",
    tag = "buildings",
    params(("id" = i32, Path, description = "Building ID")),
    request_body = UpdateBuilding,
    responses(
        (status = 200, description = "Building updated", body = Building),
        (status = 404, description = "Building not found")
    )
)]
pub async fn update_building(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateBuilding>,
) -> AppResult<Json<Building>> {
    let building = state.services.buildings.update(id, &data).await?;
    Ok(Json(building))
}

/// Delete a building
#[utoipa::path(
    delete,
    path = "/buildings/{id}",
    tag = "buildings",
    params(("id" = i32, Path, description = "Building ID")),
    responses(
        (status = 204, description = "Building deleted"),
        (status = 404, description = "Building not found")
    )
)]
pub async fn delete_building(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.buildings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
