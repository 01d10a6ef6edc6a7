//! Booking workflow: window validation, conflict detection and the
//! approval state machine

use chrono::{DateTime, Utc};

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingStatus, BookingTarget, CreateBooking, UpdateBookingStatus},
    repository::Repository,
};

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
}

impl BookingsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        self.repository.bookings.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        self.repository.bookings.get_by_id(id).await
    }

    pub async fn get_by_user(&self, user_id: i32) -> AppResult<Vec<Booking>> {
        self.repository.bookings.get_by_user(user_id).await
    }

    /// Bookings carrying the given status (PENDING lists the approval queue)
    pub async fn by_status(&self, status: BookingStatus) -> AppResult<Vec<Booking>> {
        self.repository.bookings.get_by_status(status).await
    }

    /// Create a booking as PENDING.
    ///
    /// The window is validated, the target's APPROVED bookings are checked
    /// for overlap, and the shelf/resource/user references are resolved, in
    /// that order. The insert re-runs the conflict check inside a locked
    /// transaction, so a request that passes the check here can still fail
    /// with a slot conflict if a concurrent request wins the slot.
    pub async fn create(&self, data: CreateBooking) -> AppResult<Booking> {
        validate_window(data.start_datetime, data.end_datetime, Utc::now())?;

        let conflicts = self
            .repository
            .bookings
            .find_conflicting(data.target(), data.start_datetime, data.end_datetime)
            .await?;
        if !conflicts.is_empty() {
            let message = match data.target() {
                BookingTarget::Shelf(_) => "Shelf is already booked for this time slot",
                BookingTarget::Resource(_) => "Resource is already booked for this time slot",
            };
            return Err(AppError::SlotConflict(message.to_string()));
        }

        if let Some(shelf_id) = data.shelf_id {
            self.repository
                .shelves
                .find_by_id(shelf_id)
                .await?
                .ok_or_else(|| {
                    AppError::ReferenceNotFound(format!("Shelf {} not found", shelf_id))
                })?;
        }

        // Shelf bookings keep the owning resource reference as well
        self.repository
            .resources
            .find_by_id(data.resource_id)
            .await?
            .ok_or_else(|| {
                AppError::ReferenceNotFound(format!("Resource {} not found", data.resource_id))
            })?;

        self.repository
            .users
            .find_by_id(data.user_id)
            .await?
            .ok_or_else(|| AppError::ReferenceNotFound(format!("User {} not found", data.user_id)))?;

        self.repository.bookings.create(&data).await
    }

    /// Approve or reject a booking, attributing the decision.
    ///
    /// Only APPROVED and REJECTED are accepted as new statuses. A booking
    /// that already carries a decision can be decided again; the latest
    /// decision and approver win.
    pub async fn update_status(&self, id: i32, request: &UpdateBookingStatus) -> AppResult<Booking> {
        self.repository.bookings.get_by_id(id).await?;

        let status = parse_decision(&request.status)?;

        self.repository
            .users
            .find_by_id(request.approver_id)
            .await?
            .ok_or_else(|| {
                AppError::ReferenceNotFound(format!("Approver {} not found", request.approver_id))
            })?;

        self.repository
            .bookings
            .update_status(id, status, request.approver_id)
            .await
    }

    /// Delete a booking; true iff a row was removed
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        self.repository.bookings.delete(id).await
    }
}

/// Reject empty or inverted windows, and windows starting before `now`
fn validate_window(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> AppResult<()> {
    if start >= end {
        return Err(AppError::InvalidInterval(
            "Start time must be before end time".to_string(),
        ));
    }
    if start < now {
        return Err(AppError::PastBooking);
    }
    Ok(())
}

/// Parse an approval decision; PENDING is not a valid decision
fn parse_decision(status: &str) -> AppResult<BookingStatus> {
    let parsed: BookingStatus = status
        .parse()
        .map_err(|_| AppError::InvalidStatus("Use APPROVED or REJECTED".to_string()))?;
    if !parsed.is_decision() {
        return Err(AppError::InvalidStatus(
            "Use APPROVED or REJECTED".to_string(),
        ));
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 15, hour, 0, 0).unwrap()
    }

    #[test]
    fn inverted_window_is_rejected() {
        let err = validate_window(at(11), at(10), at(8)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInterval(_)));
    }

    #[test]
    fn empty_window_is_rejected() {
        let err = validate_window(at(10), at(10), at(8)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInterval(_)));
    }

    #[test]
    fn window_in_the_past_is_rejected() {
        let err = validate_window(at(10), at(11), at(12)).unwrap_err();
        assert!(matches!(err, AppError::PastBooking));
    }

    #[test]
    fn window_starting_exactly_now_is_accepted() {
        assert!(validate_window(at(10), at(11), at(10)).is_ok());
    }

    #[test]
    fn future_window_is_accepted() {
        assert!(validate_window(at(10), at(11), at(8)).is_ok());
    }

    #[test]
    fn interval_check_runs_before_past_check() {
        // both rules violated; the interval rule wins
        let err = validate_window(at(11), at(10), at(12)).unwrap_err();
        assert!(matches!(err, AppError::InvalidInterval(_)));
    }

    #[test]
    fn decisions_parse() {
        assert_eq!(parse_decision("APPROVED").unwrap(), BookingStatus::Approved);
        assert_eq!(parse_decision("REJECTED").unwrap(), BookingStatus::Rejected);
    }

    #[test]
    fn pending_is_not_a_decision() {
        let err = parse_decision("PENDING").unwrap_err();
        assert!(matches!(err, AppError::InvalidStatus(_)));
    }

    #[test]
    fn unknown_and_lowercase_statuses_are_rejected() {
        assert!(matches!(
            parse_decision("CANCELLED").unwrap_err(),
            AppError::InvalidStatus(_)
        ));
        assert!(matches!(
            parse_decision("approved").unwrap_err(),
            AppError::InvalidStatus(_)
        ));
    }
}
