//! Shelf API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::shelf::{CreateShelf, Shelf, UpdateShelf},
};

/// List all shelves
#[utoipa::path(
    get,
    path = "/shelves",
    tag = "shelves",
    responses(
        (status = 200, description = "Shelf list", body = Vec<Shelf>)
    )
)]
pub async fn list_shelves(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Shelf>>> {
    let shelves = state.services.shelves.list().await?;
    Ok(Json(shelves))
}

/// List shelves inside a cupboard
#[utoipa::path(
    get,
    path = "/cupboards/{id}/shelves",
    tag = "shelves",
    params(("id" = i32, Path, description = "Cupboard ID")),
    responses(
        (status = 200, description = "Shelves in the cupboard", body = Vec<Shelf>)
    )
)]
pub async fn get_shelves_by_cupboard(
    State(state): State<crate::AppState>,
    Path(cupboard_id): Path<i32>,
) -> AppResult<Json<Vec<Shelf>>> {
    let shelves = state.services.shelves.list_by_cupboard(cupboard_id).await?;
    Ok(Json(shelves))
}

/// Create a shelf
#[utoipa::path(
    post,
    path = "/shelves",
    tag = "shelves",
    request_body = CreateShelf,
    responses(
        (status = 201, description = "Shelf created", body = Shelf),
        (status = 500, description = "Cupboard not found")
    )
)]
pub async fn create_shelf(
    State(state): State<crate::AppState>,
    Json(data): Json<CreateShelf>,
) -> AppResult<(StatusCode, Json<Shelf>)> {
    let shelf = state.services.shelves.create(&data).await?;
    Ok((StatusCode::CREATED, Json(shelf)))
}

/// Update a shelf
#[utoipa::path(
    put,
    path = "/shelves/{id}",
    tag = "shelves",
    params(("id" = i32, Path, description = "Shelf ID")),
    request_body = UpdateShelf,
    responses(
        (status = 200, description = "Shelf updated", body = Shelf),
        (status = 404, description = "Shelf not found")
    )
)]
pub async fn update_shelf(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(data): Json<UpdateShelf>,
) -> AppResult<Json<Shelf>> {
    let shelf = state.services.shelves.update(id, &data).await?;
    Ok(Json(shelf))
}

/// Delete a shelf
#[utoipa::path(
    delete,
    path = "/shelves/{id}",
    tag = "shelves",
    params(("id" = i32, Path, description = "Shelf ID")),
    responses(
        (status = 204, description = "Shelf deleted"),
        (status = 404, description = "Shelf not found")
    )
)]
pub async fn delete_shelf(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.shelves.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
