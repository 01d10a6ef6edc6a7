//! Booking model, status state machine and interval overlap

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};

/// Lifecycle status of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum BookingStatus {
    Pending,
    Approved,
    Rejected,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "PENDING",
            BookingStatus::Approved => "APPROVED",
            BookingStatus::Rejected => "REJECTED",
        }
    }

    /// Whether this status is a valid approval decision
    pub fn is_decision(&self) -> bool {
        matches!(self, BookingStatus::Approved | BookingStatus::Rejected)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(BookingStatus::Pending),
            "APPROVED" => Ok(BookingStatus::Approved),
            "REJECTED" => Ok(BookingStatus::Rejected),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

// SQLx conversion for BookingStatus (stored as text)
impl sqlx::Type<Postgres> for BookingStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for BookingStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for BookingStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Booking record. A booking targets either a whole resource or a single
/// shelf; shelf bookings also carry the owning resource id for query
/// convenience.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i32,
    pub resource_id: Option<i32>,
    pub shelf_id: Option<i32>,
    pub user_id: i32,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
    pub status: BookingStatus,
    /// Set only when the booking is approved or rejected
    pub approver_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Whether this booking's window overlaps [start, end)
    pub fn overlaps(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
        windows_overlap(self.start_datetime, self.end_datetime, start, end)
    }
}

/// Half-open interval overlap: [s1, e1) and [s2, e2) overlap iff
/// `s1 < e2 && s2 < e1`. Touching endpoints do not overlap, so a booking
/// ending at 10:00 never collides with one starting at 10:00.
pub fn windows_overlap(
    s1: DateTime<Utc>,
    e1: DateTime<Utc>,
    s2: DateTime<Utc>,
    e2: DateTime<Utc>,
) -> bool {
    s1 < e2 && s2 < e1
}

/// Conflict scope of a booking request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingTarget {
    Resource(i32),
    Shelf(i32),
}

/// Create booking request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBooking {
    pub user_id: i32,
    pub resource_id: i32,
    /// When set, the booking targets this shelf instead of the whole resource
    pub shelf_id: Option<i32>,
    pub start_datetime: DateTime<Utc>,
    pub end_datetime: DateTime<Utc>,
}

impl CreateBooking {
    pub fn target(&self) -> BookingTarget {
        match self.shelf_id {
            Some(shelf_id) => BookingTarget::Shelf(shelf_id),
            None => BookingTarget::Resource(self.resource_id),
        }
    }
}

/// Query parameters for listing bookings
#[derive(Debug, Deserialize, IntoParams)]
pub struct BookingListQuery {
    /// Restrict the listing to one status (e.g. PENDING)
    pub status: Option<BookingStatus>,
}

/// Approve/reject request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookingStatus {
    /// Must be APPROVED or REJECTED
    pub status: String,
    #[serde(rename = "approverId")]
    pub approver_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 6, 15, hour, min, 0).unwrap()
    }

    #[test]
    fn overlap_detects_containment_and_partial_overlap() {
        // existing 10:00-11:00
        assert!(windows_overlap(at(10, 0), at(11, 0), at(10, 30), at(10, 45)));
        assert!(windows_overlap(at(10, 0), at(11, 0), at(9, 30), at(10, 30)));
        assert!(windows_overlap(at(10, 0), at(11, 0), at(10, 30), at(11, 30)));
        assert!(windows_overlap(at(10, 0), at(11, 0), at(9, 0), at(12, 0)));
    }

    #[test]
    fn overlap_rejects_disjoint_windows() {
        assert!(!windows_overlap(at(10, 0), at(11, 0), at(8, 0), at(9, 0)));
        assert!(!windows_overlap(at(10, 0), at(11, 0), at(12, 0), at(13, 0)));
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        // back-to-back bookings share an instant but not a slot
        assert!(!windows_overlap(at(10, 0), at(11, 0), at(11, 0), at(12, 0)));
        assert!(!windows_overlap(at(10, 0), at(11, 0), at(9, 0), at(10, 0)));
    }

    #[test]
    fn status_parses_exact_uppercase_only() {
        assert_eq!("PENDING".parse::<BookingStatus>(), Ok(BookingStatus::Pending));
        assert_eq!("APPROVED".parse::<BookingStatus>(), Ok(BookingStatus::Approved));
        assert_eq!("REJECTED".parse::<BookingStatus>(), Ok(BookingStatus::Rejected));
        assert!("approved".parse::<BookingStatus>().is_err());
        assert!("CANCELLED".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn only_approved_and_rejected_are_decisions() {
        assert!(BookingStatus::Approved.is_decision());
        assert!(BookingStatus::Rejected.is_decision());
        assert!(!BookingStatus::Pending.is_decision());
    }

    #[test]
    fn shelf_id_selects_shelf_scope() {
        let req = CreateBooking {
            user_id: 1,
            resource_id: 7,
            shelf_id: Some(3),
            start_datetime: at(10, 0),
            end_datetime: at(11, 0),
        };
        assert_eq!(req.target(), BookingTarget::Shelf(3));

        let req = CreateBooking { shelf_id: None, ..req };
        assert_eq!(req.target(), BookingTarget::Resource(7));
    }
}
