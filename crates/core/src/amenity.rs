//! Amenity and booking models.
//!
//! Availability rules (capacity, opening hours, double-booking) live entirely
//! server-side; the client only checks that a requested slot is well-formed
//! before serializing it.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Status constants
// ---------------------------------------------------------------------------

/// Requested, awaiting confirmation.
pub const BOOKING_STATUS_PENDING: &str = "PENDING";
/// Confirmed by management.
pub const BOOKING_STATUS_CONFIRMED: &str = "CONFIRMED";
/// Cancelled by either party.
pub const BOOKING_STATUS_CANCELLED: &str = "CANCELLED";

/// All booking statuses the backend emits.
pub const VALID_BOOKING_STATUSES: &[&str] = &[
    BOOKING_STATUS_PENDING,
    BOOKING_STATUS_CONFIRMED,
    BOOKING_STATUS_CANCELLED,
];

/// Lifecycle status of an amenity booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    /// Return the wire string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => BOOKING_STATUS_PENDING,
            Self::Confirmed => BOOKING_STATUS_CONFIRMED,
            Self::Cancelled => BOOKING_STATUS_CANCELLED,
        }
    }

    /// Parse from a wire string, rejecting unknown statuses.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            BOOKING_STATUS_PENDING => Ok(Self::Pending),
            BOOKING_STATUS_CONFIRMED => Ok(Self::Confirmed),
            BOOKING_STATUS_CANCELLED => Ok(Self::Cancelled),
            other => Err(DomainError::Validation(format!(
                "Unknown booking status: '{other}'. Valid statuses: {}",
                VALID_BOOKING_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Models
// ---------------------------------------------------------------------------

/// A bookable amenity, listed by `GET /tenant/amenities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    pub id: EntityId,
    pub name: String,
    pub description: Option<String>,
}

/// A booking held by the tenant, listed by `GET /tenant/amenities/bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityBooking {
    pub id: EntityId,
    pub amenity_id: EntityId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub status: BookingStatus,
}

/// Payload for `POST /tenant/amenities/book`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAmenityBooking {
    pub amenity_id: EntityId,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

impl NewAmenityBooking {
    /// Check that the requested slot is well-formed (start strictly before
    /// end). Availability is the server's call.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.start_time >= self.end_time {
            return Err(DomainError::Validation(
                "Booking start time must be before end time".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    #[test]
    fn status_round_trip() {
        for s in VALID_BOOKING_STATUSES {
            assert_eq!(BookingStatus::parse(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn status_parse_invalid() {
        assert!(BookingStatus::parse("BOOKED").is_err());
    }

    #[test]
    fn booking_with_ordered_times_valid() {
        let start = Utc::now();
        let booking = NewAmenityBooking {
            amenity_id: "a_1".to_string(),
            start_time: start,
            end_time: start + Duration::hours(1),
        };
        assert!(booking.validate().is_ok());
    }

    #[test]
    fn booking_with_reversed_times_rejected() {
        let start = Utc::now();
        let booking = NewAmenityBooking {
            amenity_id: "a_1".to_string(),
            start_time: start,
            end_time: start - Duration::minutes(30),
        };
        assert!(booking.validate().is_err());
    }

    #[test]
    fn booking_with_zero_length_slot_rejected() {
        let start = Utc::now();
        let booking = NewAmenityBooking {
            amenity_id: "a_1".to_string(),
            start_time: start,
            end_time: start,
        };
        assert!(booking.validate().is_err());
    }
}
