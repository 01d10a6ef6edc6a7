//! Cupboard API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::cupboard::{CreateCupboard, Cupboard, UpdateCupboard},
};

/// List all cupboards
#[utoipa::path(
    get,
    path = "/cupboards",
    tag = "cupboards",
    responses(
        (status = 200, description = "Cupboard list", body = Vec<Cupboard>)
    )
)]
pub async fn list_cupboards(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Cupboard>>> {
    let cupboards = state.services.cupboards.list().await?;
    Ok(Json(cupboards))
}

/// List cupboards inside a resource
#[utoipa::path(
    get,
    path = "/resources/{id}/cupboards",
    tag = "cupboards",
    params(("id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Cupboards in the resource", body = Vec<Cupboard>)
    )
)]
pub async fn get_cupboards_by_resource(
    State(state): State<crate::AppState>,
    Path(resource_id): Path<i32>,
) -> AppResult<Json<Vec<Cupboard>>> {
    let cupboards = state.services.cupboards.list_by_resource(resource_id).await?;
    Ok(Json(cupboards))
}

/// Create a cupboard
#[utoipa::path(
    post,
    path = "/cupboards",
    tag = "cupboards",
    request_body = CreateCupboard,
    responses(
        (status = 201, description = "Cupboard created", body = Cupboard),
        (status = 500, description = "Resource not found")
    )
)]
pub async fn create_cupboard(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateCupboard>,
) -> AppResult<(StatusCode, Json<Cupboard>)> {
    let cupboard = state.services.cupboards.create(&data).await?;
    Ok((StatusCode::CREATED, Json(cupboard)))
}

/// Update a cupboard
#[utoipa::path(
    put,
    path = "/cupboards/{id}",
    tag = "cupboards",
    params(("id" = i32, Path, description = "Cupboard ID")),
    request_body = UpdateCupboard,
    responses(
        (status = 200, description = "Cupboard updated", body = Cupboard),
        (status = 404, description = "Cupboard not found")
    )
)]
pub async fn update_cupboard(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateCupboard>,
) -> AppResult<Json<Cupboard>> {
    let cupboard = state.services.cupboards.update(id, &data).await?;
    Ok(Json(cupboard))
}

/// Delete a cupboard
#[utoipa::path(
    delete,
    path = "/cupboards/{id}",
    tag = "cupboards",
    params(("id" = i32, Path, description = "Cupboard ID")),
    responses(
        (status = 204, description = "Cupboard deleted"),
        (status = 404, description = "Cupboard not found")
    )
)]
pub async fn delete_cupboard(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.cupboards.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
