//! Booking API endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingListQuery, CreateBooking, UpdateBookingStatus},
};

/// List bookings, optionally filtered by status
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    params(BookingListQuery),
    responses(
        (status = 200, description = "Booking list", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    Query(query): Query<BookingListQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = match query.status {
        Some(status) => state.services.bookings.by_status(status).await?,
        None => state.services.bookings.list().await?,
    };
    Ok(Json(bookings))
}

/// Get booking by ID
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking details", body = Booking),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.get_by_id(id).await?;
    Ok(Json(booking))
}

/// Get bookings for a specific user
#[utoipa::path(
    get,
    path = "/users/{id}/bookings",
    tag = "bookings",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User's bookings", body = Vec<Booking>)
    )
)]
pub async fn get_user_bookings(
    State(state): State<crate::AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.get_by_user(user_id).await?;
    Ok(Json(bookings))
}

/// Create a booking.
///
/// The request targets either a whole resource or, when `shelf_id` is set,
/// a single shelf within it. Validation and conflict failures surface as
/// 500 with a descriptive message.
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created as PENDING", body = Booking),
        (status = 500, description = "Invalid window, past start, slot conflict, or unresolved reference")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let booking = state.services.bookings.create(request).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Approve or reject a booking
#[utoipa::path(
    put,
    path = "/bookings/{id}/status",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatus,
    responses(
        (status = 200, description = "Booking updated", body = Booking),
        (status = 404, description = "Booking not found"),
        (status = 500, description = "Invalid status or unresolved approver")
    )
)]
pub async fn update_booking_status(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateBookingStatus>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.update_status(id, &request).await?;
    Ok(Json(booking))
}

/// Delete a booking.
///
/// Returns `true` with 200 when a row was removed, `false` with 500 when
/// the id did not exist.
#[utoipa::path(
    delete,
    path = "/bookings/{id}",
    tag = "bookings",
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking deleted", body = bool),
        (status = 500, description = "Booking did not exist", body = bool)
    )
)]
pub async fn delete_booking(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<(StatusCode, Json<bool>)> {
    let deleted = state.services.bookings.delete(id).await?;
    if deleted {
        Ok((StatusCode::OK, Json(true)))
    } else {
        Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(false)))
    }
}
