//! Bookings repository: persistence plus the conflict queries

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingStatus, BookingTarget, CreateBooking},
};

// Advisory-lock classes; resource and shelf scopes must not share keys.
const RESOURCE_LOCK_CLASS: i32 = 1;
const SHELF_LOCK_CLASS: i32 = 2;

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all bookings
    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Get bookings for a user
    pub async fn get_by_user(&self, user_id: i32) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get bookings by status
    pub async fn get_by_status(&self, status: BookingStatus) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE status = $1")
            .bind(status)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// APPROVED bookings on `target` overlapping [start, end).
    ///
    /// Overlap is half-open: an existing [s, e) conflicts iff
    /// s < end AND e > start. Resource and shelf scopes are queried
    /// independently.
    pub async fn find_conflicting(
        &self,
        target: BookingTarget,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>> {
        let (sql, target_id) = match target {
            BookingTarget::Resource(id) => (
                "SELECT * FROM bookings WHERE resource_id = $1 AND status = 'APPROVED' \
                 AND start_datetime < $3 AND end_datetime > $2",
                id,
            ),
            BookingTarget::Shelf(id) => (
                "SELECT * FROM bookings WHERE shelf_id = $1 AND status = 'APPROVED' \
                 AND start_datetime < $3 AND end_datetime > $2",
                id,
            ),
        };

        let rows = sqlx::query_as::<_, Booking>(sql)
            .bind(target_id)
            .bind(start)
            .bind(end)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Insert a new PENDING booking.
    ///
    /// The conflict check runs again inside the transaction, after taking a
    /// transaction-scoped advisory lock on the target, so two concurrent
    /// requests for the same slot serialize: the loser observes the winner's
    /// row and fails with a slot conflict instead of double-booking.
    pub async fn create(&self, data: &CreateBooking) -> AppResult<Booking> {
        let mut tx = self.pool.begin().await?;

        let (lock_class, target_id) = match data.target() {
            BookingTarget::Resource(id) => (RESOURCE_LOCK_CLASS, id),
            BookingTarget::Shelf(id) => (SHELF_LOCK_CLASS, id),
        };

        sqlx::query("SELECT pg_advisory_xact_lock($1, $2)")
            .bind(lock_class)
            .bind(target_id)
            .execute(&mut *tx)
            .await?;

        let conflict_sql = match data.target() {
            BookingTarget::Resource(_) => {
                "SELECT COUNT(*) FROM bookings WHERE resource_id = $1 AND status = 'APPROVED' \
                 AND start_datetime < $3 AND end_datetime > $2"
            }
            BookingTarget::Shelf(_) => {
                "SELECT COUNT(*) FROM bookings WHERE shelf_id = $1 AND status = 'APPROVED' \
                 AND start_datetime < $3 AND end_datetime > $2"
            }
        };

        let conflicts: i64 = sqlx::query_scalar(conflict_sql)
            .bind(target_id)
            .bind(data.start_datetime)
            .bind(data.end_datetime)
            .fetch_one(&mut *tx)
            .await?;

        if conflicts > 0 {
            // dropping the transaction rolls it back
            let message = match data.target() {
                BookingTarget::Shelf(_) => "Shelf is already booked for this time slot",
                BookingTarget::Resource(_) => "Resource is already booked for this time slot",
            };
            return Err(AppError::SlotConflict(message.to_string()));
        }

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (resource_id, shelf_id, user_id, start_datetime, end_datetime, status)
            VALUES ($1, $2, $3, $4, $5, 'PENDING')
            RETURNING *
            "#,
        )
        .bind(data.resource_id)
        .bind(data.shelf_id)
        .bind(data.user_id)
        .bind(data.start_datetime)
        .bind(data.end_datetime)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(booking)
    }

    /// Set status and approver on a booking
    pub async fn update_status(
        &self,
        id: i32,
        status: BookingStatus,
        approver_id: i32,
    ) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $1, approver_id = $2 WHERE id = $3 RETURNING *",
        )
        .bind(status)
        .bind(approver_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Delete a booking; true iff a row was removed
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
