//! Resource type API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::resource_type::{CreateResourceType, ResourceType, UpdateResourceType},
};

/// List all resource types
#[utoipa::path(
    get,
    path = "/resource-types",
    tag = "resource-types",
    responses(
        (status = 200, description = "Resource type list", body = Vec<ResourceType>)
    )
)]
pub async fn list_resource_types(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ResourceType>>> {
    let types = state.services.resource_types.list().await?;
    Ok(Json(types))
}

/// Get resource type by ID
#[utoipa::path(
    get,
    path = "/resource-types/{id}",
    tag = "resource-types",
    params(("id" = i32, Path, description = "Resource type ID")),
    responses(
        (status = 200, description = "Resource type details", body = ResourceType),
        (status = 404, description = "Resource type not found")
    )
)]
pub async fn get_resource_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ResourceType>> {
    let resource_type = state.services.resource_types.get_by_id(id).await?;
    Ok(Json(resource_type))
}

/// Create a resource type
#[utoipa::path(
    post,
    path = "/resource-types",
    tag = "resource-types",
    request_body = CreateResourceType,
    responses(
        (status = 201, description = "Resource type created", body = ResourceType)
    )
)]
pub async fn create_resource_type(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateResourceType>,
) -> AppResult<(StatusCode, Json<ResourceType>)> {
    let resource_type = state.services.resource_types.create(&data).await?;
    Ok((StatusCode::CREATED, Json(resource_type)))
}

/// Update a resource type
#[utoipa::path(
    put,
    path = "/resource-types/{id}",
    tag = "resource-types",
    params(("id" = i32, Path, description = "Resource type ID")),
    request_body = UpdateResourceType,
    responses(
        (status = 200, description = "Resource type updated", body = ResourceType),
        (status = 404, description = "Resource type not found")
    )
)]
pub async fn update_resource_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateResourceType>,
) -> AppResult<Json<ResourceType>> {
    let resource_type = state.services.resource_types.update(id, &data).await?;
    Ok(Json(resource_type))
}

/// Delete a resource type
#[utoipa::path(
    delete,
    path = "/resource-types/{id}",
    tag = "resource-types",
    params(("id" = i32, Path, description = "Resource type ID")),
    responses(
        (status = 204, description = "Resource type deleted"),
        (status = 404, description = "Resource type not found")
    )
)]
pub async fn delete_resource_type(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.resource_types.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
