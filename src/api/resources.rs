//! Resource API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::resource::{CreateResource, Resource, UpdateResource},
};

/// List all resources
#[utoipa::path(
    get,
    path = "/resources",
    tag = "resources",
    responses(
        (status = 200, description = "Resource list", body = Vec<Resource>)
    )
)]
pub async fn list_resources(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Resource>>> {
    let resources = state.services.resources.list().await?;
    Ok(Json(resources))
}

/// Get resource by ID
#[utoipa::path(
    get,
    path = "/resources/{id}",
    tag = "resources",
    params(("id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource details", body = Resource),
        (status = 404, description = "Resource not found")
    )
)]
pub async fn get_resource(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Resource>> {
    let resource = state.services.resources.get_by_id(id).await?;
    Ok(Json(resource))
}

/// Create a resource
#[utoipa::path(
    post,
    path = "/resources",
    tag = "resources",
    request_body = CreateResource,
    responses(
        (status = 201, description = "Resource created", body = Resource),
        (status = 500, description = "Building or resource type not found")
    )
)]
pub async fn create_resource(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateResource>,
) -> AppResult<(StatusCode, Json<Resource>)> {
    let resource = state.services.resources.create(&data).await?;
    Ok((StatusCode::CREATED, Json(resource)))
}

/// Update a resource
#[utoipa::path(
    put,
    path = "/resources/{id}",
    tag = "resources",
    params(("id" = i32, Path, description = "Resource ID")),
    request_body = UpdateResource,
    responses(
        (status = 200, description = "Resource updated", body = Resource),
        (status = 404, description = "Resource not found")
    )
)]
pub async fn update_resource(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateResource>,
) -> AppResult<Json<Resource>> {
    let resource = state.services.resources.update(id, &data).await?;
    Ok(Json(resource))
}

/// Delete a resource
#[utoipa::path(
    delete,
    path = "/resources/{id}",
    tag = "resources",
    params(("id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 204, description = "Resource deleted"),
        (status = 404, description = "Resource not found")
    )
)]
pub async fn delete_resource(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.resources.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
