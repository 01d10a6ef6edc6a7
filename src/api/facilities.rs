//! Facility API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::facility::{CreateFacility, Facility, UpdateFacility},
};

/// List all facilities
#[utoipa::path(
    get,
    path = "/facilities",
    tag = "facilities",
    responses(
        (status = 200, description = "Facility list", body = Vec<Facility>)
    )
)]
pub async fn list_facilities(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Facility>>> {
    let facilities = state.services.facilities.list().await?;
    Ok(Json(facilities))
}

/// List facilities attached to a resource
#[utoipa::path(
    get,
    path = "/resources/{id}/facilities",
    tag = "facilities",
    params(("id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Facilities of the resource", body = Vec<Facility>)
    )
)]
pub async fn get_facilities_by_resource(
    State(state): State<crate::AppState>,
    Path(resource_id): Path<i32>,
) -> AppResult<Json<Vec<Facility>>> {
    let facilities = state.services.facilities.list_by_resource(resource_id).await?;
    Ok(Json(facilities))
}

/// Create a facility
#[utoipa::path(
    post,
    path = "/facilities",
    tag = "facilities",
    request_body = CreateFacility,
    responses(
        (status = 201, description = "Facility created", body = Facility),
        (status = 500, description = "Resource not found")
    )
)]
pub async fn create_facility(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateFacility>,
) -> AppResult<(StatusCode, Json<Facility>)> {
    let facility = state.services.facilities.create(&data).await?;
    Ok((StatusCode::CREATED, Json(facility)))
}

/// Update a facility
#[utoipa::path(
    put,
    path = "/facilities/{id}",
    tag = "facilities",
    params(("id" = i32, Path, description = "Facility ID")),
    request_body = UpdateFacility,
    responses(
        (status = 200, description = "Facility updated", body = Facility),
        (status = 404, description = "Facility not found")
    )
)]
pub async fn update_facility(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateFacility>,
) -> AppResult<Json<Facility>> {
    let facility = state.services.facilities.update(id, &data).await?;
    Ok(Json(facility))
}

/// Delete a facility
#[utoipa::path(
    delete,
    path = "/facilities/{id}",
    tag = "facilities",
    params(("id" = i32, Path, description = "Facility ID")),
    responses(
        (status = 204, description = "Facility deleted"),
        (status = 404, description = "Facility not found")
    )
)]
pub async fn delete_facility(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.facilities.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
